//! Path and directory management.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::fs::naming::sanitize_path_component;

/// Get the folder for an album: the download root joined with its title.
///
/// With `sanitize_titles` off the title is used as is, so a title containing
/// separators produces nested folders.
pub fn get_album_folder(config: &Config, title: &str) -> Result<PathBuf> {
    let folder = if config.options.sanitize_titles {
        sanitize_path_component(title)?
    } else {
        title.to_string()
    };

    Ok(config.download_directory().join(folder))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Names of the regular files currently in `dir`.
pub fn scan_existing_files(dir: &Path) -> Result<HashSet<String>> {
    let mut names = HashSet::new();

    if !dir.exists() {
        return Ok(names);
    }

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        // Follows symlinks, so a link to a file counts as present
        if !entry.path().is_file() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => {
                names.insert(name);
            }
            Err(name) => tracing::debug!("Ignoring non UTF-8 file name: {:?}", name),
        }
    }

    Ok(names)
}
