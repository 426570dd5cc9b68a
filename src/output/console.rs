//! Console output utilities.

use console::{style, Term};

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Erome Downloader                                  ║
║     Album images and videos, one folder per album     ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print the header shown before an album starts downloading.
pub fn print_album_header(album_url: &str, title: &str, total_files: usize) {
    println!("Downloading files from album: {}", style(album_url).bold());
    println!("Title: {}", title);
    println!("Total Files: {}", total_files);
    println!();
    println!("Starting Download...");
    println!();
}

/// Clear the terminal, ignoring failures (e.g. output is not a tty).
pub fn clear_screen() {
    let term = Term::stdout();
    if term.is_term() {
        if let Err(e) = term.clear_screen() {
            tracing::debug!("Could not clear terminal: {}", e);
        }
    }
}
