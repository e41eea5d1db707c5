//! Project configuration (`.scl.toml`).

pub mod settings;

pub use settings::Settings;
