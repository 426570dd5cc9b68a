//! Filesystem module.
//!
//! Provides:
//! - Album folder resolution and creation
//! - Snapshot of already downloaded files
//! - Filename derivation and sanitization

pub mod naming;
pub mod paths;

pub use naming::{file_name_from_url, sanitize_path_component, validate_filename};
pub use paths::{ensure_dir, get_album_folder, scan_existing_files};
