//! Media item representation.

/// Type of media content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Human readable label used in console output.
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

/// A downloadable media item found on an album page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// URL exactly as it appeared in the page.
    pub url: String,

    /// Which element the URL came from.
    pub media_type: MediaType,
}

impl MediaItem {
    pub fn new(url: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            url: url.into(),
            media_type,
        }
    }
}

/// Everything extracted from an album page.
#[derive(Debug, Clone)]
pub struct AlbumPage {
    /// Album title from the `og:title` metadata.
    pub title: String,

    /// Distinct media URLs, videos first.
    pub items: Vec<MediaItem>,
}

impl AlbumPage {
    /// Number of distinct files on the page.
    pub fn total_files(&self) -> usize {
        self.items.len()
    }

    /// Count items of one media type.
    pub fn count(&self, media_type: MediaType) -> usize {
        self.items
            .iter()
            .filter(|item| item.media_type == media_type)
            .count()
    }
}
