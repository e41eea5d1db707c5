use clap::Parser;
use scl::cli::{AesAction, Cli, Commands, Context, DigestAction, RsaAction, SssAction};
use scl::cli::commands::{aes, completions, digest, rsa, sss, version};
use scl::logging::{default_filter, init_logging};

fn main() {
    let cli = Cli::parse();

    // These never touch settings, so a broken .scl.toml must not block them.
    let standalone = match cli.command {
        Commands::Completions { ref shell } => Some(completions::execute(shell)),
        Commands::Version => Some(version::execute()),
        _ => None,
    };
    if let Some(result) = standalone {
        exit_on_error(result);
        return;
    }

    // Settings are needed before logging so the configured log format applies.
    let ctx = match Context::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            scl::cli::output::error(&e.to_string());
            std::process::exit(1);
        }
    };
    init_logging(default_filter(cli.verbose), ctx.settings.log_format());

    let result = match cli.command {
        Commands::Sss { ref action } => match action {
            SssAction::Generate {
                ref input,
                min_shares,
                num_shares,
            } => sss::execute_generate(&ctx, input, *min_shares, *num_shares),
            SssAction::Combine { ref input } => sss::execute_combine(&ctx, input),
        },
        Commands::Digest { ref action } => match action {
            DigestAction::Sign {
                ref input,
                ref digest,
            } => digest::execute_sign(&ctx, input, digest.as_deref()),
            DigestAction::Verify {
                ref input,
                ref signature,
                ref digest,
            } => digest::execute_verify(&ctx, input, signature, digest.as_deref()),
            DigestAction::Hmac {
                ref input,
                ref key_path,
                ref digest,
            } => digest::execute_hmac(&ctx, input, key_path.as_deref(), digest.as_deref()),
            DigestAction::HmacVerify {
                ref input,
                ref signature,
                ref key_path,
                ref digest,
            } => digest::execute_hmac_verify(
                &ctx,
                input,
                signature,
                key_path,
                digest.as_deref(),
            ),
            DigestAction::List => digest::execute_list(),
        },
        Commands::Aes { ref action } => match action {
            AesAction::Encrypt {
                ref input,
                ref key_path,
            } => aes::execute_encrypt(&ctx, input, key_path.as_deref()),
            AesAction::Decrypt {
                ref input,
                ref key_path,
            } => aes::execute_decrypt(&ctx, input, key_path),
            AesAction::Ciphers => aes::execute_ciphers(),
        },
        Commands::Rsa { ref action } => match action {
            RsaAction::Generate { key_size } => rsa::execute_generate(&ctx, *key_size),
            RsaAction::Sign {
                ref input,
                ref priv_key,
            } => rsa::execute_sign(&ctx, input, priv_key),
            RsaAction::Verify {
                ref input,
                ref signature,
                ref pub_key,
                ref priv_key,
            } => match pub_key.as_deref().or(priv_key.as_deref()) {
                Some(key_path) => rsa::execute_verify(&ctx, input, signature, key_path),
                None => Err(scl::errors::SclError::CommandFailed(
                    "provide a public key (-p) or private key (-Z)".into(),
                )),
            },
        },
        Commands::Completions { .. } | Commands::Version => Ok(()),
    };

    exit_on_error(result);
}

fn exit_on_error(result: scl::errors::Result<()>) {
    if let Err(e) = result {
        scl::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
