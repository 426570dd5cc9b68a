//! Album page parsing.
//!
//! An album page lists its media in two places:
//! - `<source src="...">` elements inside the inline video players
//! - `<img class="img-back" data-src="...">` lazy-loaded images, where the
//!   real URL lives in `data-src` rather than `src`

use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::error::{Error, Result};
use crate::media::item::{AlbumPage, MediaItem, MediaType};

const TITLE_SELECTOR: &str = r#"meta[property="og:title"]"#;
const VIDEO_SELECTOR: &str = "source";
const IMAGE_SELECTOR: &str = "img.img-back";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("Invalid selector '{}': {}", css, e)))
}

/// Parse an album page into its title and distinct media URLs.
pub fn parse_album_page(html: &str) -> Result<AlbumPage> {
    let document = Html::parse_document(html);

    let title = extract_title(&document)?;
    let videos = extract_attr(&document, VIDEO_SELECTOR, "src")?;
    let images = extract_attr(&document, IMAGE_SELECTOR, "data-src")?;

    tracing::debug!(
        "Found {} video sources and {} images before dedup",
        videos.len(),
        images.len()
    );

    let items = merge_unique(
        videos
            .into_iter()
            .map(|url| MediaItem::new(url, MediaType::Video))
            .chain(
                images
                    .into_iter()
                    .map(|url| MediaItem::new(url, MediaType::Image)),
            ),
    );

    Ok(AlbumPage { title, items })
}

fn extract_title(document: &Html) -> Result<String> {
    let title_selector = selector(TITLE_SELECTOR)?;

    document
        .select(&title_selector)
        .find_map(|meta| meta.value().attr("content"))
        .filter(|content| !content.trim().is_empty())
        .map(str::to_string)
        .ok_or(Error::MissingTitle)
}

/// Collect `attr` of every element matching `css`, ignoring elements without it.
fn extract_attr(document: &Html, css: &str, attr: &str) -> Result<Vec<String>> {
    let element_selector = selector(css)?;

    Ok(document
        .select(&element_selector)
        .filter_map(|element| {
            let value = element.value().attr(attr);
            if value.is_none() {
                tracing::debug!("Ignoring <{}> without {}", element.value().name(), attr);
            }
            value
        })
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Drop repeated URLs (exact string match), keeping the first occurrence.
fn merge_unique(items: impl Iterator<Item = MediaItem>) -> Vec<MediaItem> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(item.url.clone())).collect()
}
