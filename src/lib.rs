//! Erome Downloader - download the images and videos of an Erome album.
//!
//! The whole run is a linear pipeline: fetch the album page, extract its title
//! and media URLs, then download each file sequentially into
//! `<download directory>/<album title>/`, skipping names already present.
//!
//! # Features
//!
//! - Videos (`<source>`) and lazy-loaded back images (`img.img-back`)
//! - Name-based deduplication against the album folder
//! - Hotlink `Referer`/`Origin` headers for the media CDN
//! - Per-file outcome counting (downloaded, skipped, failed)
//!
//! # Example
//!
//! ```no_run
//! use erome_downloader::{collect_album, Config, EromeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let client = EromeClient::new(&config.options.user_agent)?;
//!
//!     let state = collect_album(&client, &config, "https://www.erome.com/a/AbCd1234").await?;
//!     println!("{} downloaded, {} failed", state.complete, state.failed);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::EromeClient;
pub use config::Config;
pub use download::{collect_album, AlbumState, DownloadOutcome};
pub use error::{Error, Result};
pub use media::{AlbumPage, MediaItem, MediaType};
