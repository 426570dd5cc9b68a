//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Erome album downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "erome-downloader",
    version,
    about = "Download images and videos from an Erome album",
    long_about = "Downloads every image and video of an Erome album into downloads/<album title>/.\n\n\
                  Files that already exist in the album folder are skipped, so re-running is safe."
)]
pub struct Args {
    /// Album URL to download.
    #[arg(short = 'u', long = "url")]
    pub url: String,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Browser user agent string.
    #[arg(short = 'a', long = "user-agent", env = "EROME_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Use album titles as folder names without replacing unsafe characters.
    #[arg(long)]
    pub raw_titles: bool,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.download_directory {
            config.options.download_directory = dir.clone();
        }

        if let Some(user_agent) = &self.user_agent {
            config.options.user_agent = user_agent.clone();
        }

        // Boolean flags (only override if set to non-default)
        if self.raw_titles {
            config.options.sanitize_titles = false;
        }

        if self.quiet {
            config.options.show_downloads = false;
            config.options.show_skipped_downloads = false;
        }
    }
}
