//! Hotlink headers for media requests.
//!
//! The media CDN only serves files when the request looks like it came from
//! the album page, so every media request carries a forged `Origin` and
//! `Referer` built from the file's registrable domain.

use reqwest::header::{self, HeaderMap, HeaderValue};
use url::{Host, Url};

use crate::error::Result;

/// Registrable domain (domain + public suffix) of a URL's host.
///
/// `https://v12.erome.com/file.mp4` yields `erome.com`. IP literals and hosts
/// without a known public suffix are returned unchanged.
pub fn registrable_domain(url: &Url) -> Option<String> {
    match url.host()? {
        Host::Domain(domain) => Some(psl::domain_str(domain).unwrap_or(domain).to_string()),
        Host::Ipv4(_) | Host::Ipv6(_) => url.host_str().map(str::to_string),
    }
}

/// `Origin` value for a media URL.
pub fn origin_for(url: &Url) -> Option<String> {
    registrable_domain(url).map(|domain| format!("https://{}", domain))
}

/// Build the `Origin`/`Referer` headers for a media request.
///
/// The album URL is used as referer when known, otherwise the origin itself.
pub fn media_headers(url: &Url, referer: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    if let Some(origin) = origin_for(url) {
        let referer = referer.unwrap_or(origin.as_str());
        headers.insert(header::REFERER, HeaderValue::from_str(referer)?);
        headers.insert(header::ORIGIN, HeaderValue::from_str(&origin)?);
    } else if let Some(referer) = referer {
        headers.insert(header::REFERER, HeaderValue::from_str(referer)?);
    }

    Ok(headers)
}
