//! HTTP access to Erome.
//!
//! This module provides:
//! - The shared HTTP client
//! - Album page fetching
//! - Hotlink headers for media downloads

pub mod client;
pub mod headers;

pub use client::{EromeClient, ALBUM_HOST};
pub use headers::{media_headers, origin_for, registrable_domain};
