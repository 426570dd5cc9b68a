//! Download module for album downloading.
//!
//! This module provides:
//! - Per-album state and outcome counters
//! - Album page collection
//! - Media file downloading

pub mod album;
pub mod media;
pub mod state;

pub use album::collect_album;
pub use media::download_media_file;
pub use state::{AlbumState, DownloadOutcome};
