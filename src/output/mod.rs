//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::{
    clear_screen, print_album_header, print_banner, print_error, print_info, print_success,
    print_warning,
};
pub use progress::{create_byte_spinner, create_download_bar, create_file_progress};
pub use stats::print_album_stats;
