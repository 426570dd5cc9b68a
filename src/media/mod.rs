//! Media module for album page parsing and media items.

pub mod item;
pub mod parser;

pub use item::{AlbumPage, MediaItem, MediaType};
pub use parser::parse_album_page;
