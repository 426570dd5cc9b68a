//! Download state tracking.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use url::Url;

/// Result of handling one media URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The file was fetched and written.
    Downloaded,
    /// A file with the same name already existed; nothing was fetched.
    Skipped,
    /// The file could not be fetched or written.
    Failed,
}

impl fmt::Display for DownloadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadOutcome::Downloaded => write!(f, "downloaded"),
            DownloadOutcome::Skipped => write!(f, "skipped"),
            DownloadOutcome::Failed => write!(f, "failed"),
        }
    }
}

/// Per-album download state.
#[derive(Debug)]
pub struct AlbumState {
    // Album info
    pub album_url: Url,
    pub title: String,

    // Folder the files are written to
    pub base_path: PathBuf,

    // File names present in the folder when the album started, plus the ones
    // written during this run. The folder itself is never re-read.
    pub existing_files: HashSet<String>,

    // Statistics
    pub complete: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl AlbumState {
    /// Create a new state from the folder snapshot taken at album start.
    pub fn new(
        album_url: Url,
        title: String,
        base_path: PathBuf,
        existing_files: HashSet<String>,
    ) -> Self {
        Self {
            album_url,
            title,
            base_path,
            existing_files,
            complete: 0,
            skipped: 0,
            failed: 0,
        }
    }

    /// Check if a file with this name is already in the album folder.
    pub fn is_file_known(&self, file_name: &str) -> bool {
        self.existing_files.contains(file_name)
    }

    /// Remember a file written during this run.
    pub fn mark_file_known(&mut self, file_name: String) {
        self.existing_files.insert(file_name);
    }

    /// Count an outcome.
    pub fn record(&mut self, outcome: DownloadOutcome) {
        match outcome {
            DownloadOutcome::Downloaded => self.complete += 1,
            DownloadOutcome::Skipped => self.skipped += 1,
            DownloadOutcome::Failed => self.failed += 1,
        }
    }

    /// Get total number of URLs handled.
    pub fn total_processed(&self) -> u64 {
        self.complete + self.skipped + self.failed
    }
}
