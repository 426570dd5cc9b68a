//! Erome HTTP client.

use reqwest::{header, Client, Response, StatusCode};
use url::Url;

use crate::api::headers::media_headers;
use crate::config::validate_album_url;
use crate::error::{Error, Result};

/// The only host albums can be downloaded from.
pub const ALBUM_HOST: &str = "www.erome.com";

/// HTTP client shared by every request of a run.
///
/// Wraps a single `reqwest::Client`, so connections to the page host and the
/// media CDN are pooled and reused across files.
pub struct EromeClient {
    client: Client,
    user_agent: String,
    album_host: String,
}

impl EromeClient {
    /// Create a new client sending the given user agent.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .cookie_store(true)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
            album_host: ALBUM_HOST.to_string(),
        })
    }

    /// Point album validation at another host (mock servers in tests).
    #[cfg(test)]
    pub(crate) fn with_album_host(mut self, host: &str) -> Self {
        self.album_host = host.to_string();
        self
    }

    /// Host that album URLs must use.
    pub fn album_host(&self) -> &str {
        &self.album_host
    }

    /// Check that a URL is an album on the supported host.
    pub fn validate_album_url(&self, album_url: &str) -> Result<Url> {
        validate_album_url(album_url, &self.album_host)
    }

    /// Fetch the HTML of an album page.
    ///
    /// Anything but `200 OK` is an error carrying the status code.
    pub async fn get_album_page(&self, album_url: &Url) -> Result<String> {
        tracing::debug!("GET {}", album_url);

        let response = self
            .client
            .get(album_url.clone())
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status != StatusCode::OK {
            return Err(Error::PageFetch {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Start a streaming download of a media file.
    ///
    /// The body is not read; callers pull it with `bytes_stream()`.
    pub async fn download_file(&self, url: &Url, referer: Option<&str>) -> Result<Response> {
        let headers = media_headers(url, referer)?;
        tracing::debug!("GET {} (referer: {:?})", url, referer);

        let response = self
            .client
            .get(url.clone())
            .header(header::USER_AGENT, &self.user_agent)
            .headers(headers)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("File request failed: {:?}", response);
            return Err(Error::FileFetch {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}
