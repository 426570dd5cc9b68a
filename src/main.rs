//! Erome Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use erome_downloader::{
    api::EromeClient,
    cli::Args,
    config::{validate_config, Config},
    download::collect_album,
    error::{exit_codes, Error, Result},
    output::{print_banner, print_error, print_info, print_warning},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::UnsupportedHost { .. }
                | Error::PageFetch { .. }
                | Error::MissingTitle
                | Error::Parse(_)
                | Error::Http(_) => ExitCode::from(exit_codes::ALBUM_ERROR as u8),
                Error::Io(_) | Error::InvalidFilename(_) => {
                    ExitCode::from(exit_codes::FILESYSTEM_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    if !args.quiet {
        print_banner();
    }

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        if args.config.as_os_str() != "config.toml" {
            print_warning(&format!(
                "Configuration file not found: {}",
                args.config.display()
            ));
        }
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    print_info(&format!(
        "Saving to {}",
        config.download_directory().display()
    ));

    let client = EromeClient::new(&config.options.user_agent)?;
    let state = collect_album(&client, &config, &args.url).await?;

    if state.failed > 0 {
        tracing::warn!("{} file(s) failed to download", state.failed);
    }

    Ok(())
}
