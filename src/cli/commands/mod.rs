pub mod aes;
pub mod completions;
pub mod digest;
pub mod rsa;
pub mod sss;
pub mod version;
