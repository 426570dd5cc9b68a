//! Statistics reporting.

use console::style;

use crate::download::AlbumState;

/// Print the final tally for an album.
pub fn print_album_stats(state: &AlbumState) {
    println!(
        "{} {} {} {}",
        style(format!("| Files Complete: {}", state.complete)).green(),
        style(format!("- Files Skipped: {}", state.skipped)).yellow(),
        style(format!("- Files Failed: {}", state.failed)).red(),
        "|"
    );
    println!();
    println!("Finished Downloading {}. Enjoy :)", state.album_url);
}
