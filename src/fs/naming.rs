//! Filename derivation and sanitization.

use url::Url;

use crate::error::{Error, Result};

/// Derive the local file name of a media URL: its last path segment, verbatim.
///
/// No percent-decoding and no collision renaming. Two URLs with the same last
/// segment map to the same file.
pub fn file_name_from_url(url: &Url) -> Result<String> {
    let name = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");

    validate_filename(name)?;
    Ok(name.to_string())
}

/// Reject names that cannot be written as a single file inside the album folder.
pub fn validate_filename(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    if name == "." || name == ".." {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    Ok(())
}

/// Sanitize an album title for use as a folder name.
///
/// Separators and characters reserved on common filesystems become `_`.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    let sanitized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        return Err(Error::InvalidFilename(format!(
            "Album title cannot be used as a folder name: '{}'",
            name
        )));
    }

    Ok(sanitized)
}
