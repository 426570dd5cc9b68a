//! Media file downloading.

use std::path::Path;

use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::Response;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::api::EromeClient;
use crate::config::Config;
use crate::download::state::{AlbumState, DownloadOutcome};
use crate::error::{Error, Result};
use crate::fs::file_name_from_url;
use crate::media::MediaItem;
use crate::output::{create_file_progress, print_error, print_success, print_warning};

/// Bytes written per `write_all` call.
const CHUNK_SIZE: usize = 1024;

/// Download one media item into the album folder.
///
/// Never fails: every error is printed and counted as [`DownloadOutcome::Failed`],
/// so one broken file does not stop the rest of the album. A file that fails
/// mid-stream is left partially written.
pub async fn download_media_file(
    api: &EromeClient,
    config: &Config,
    state: &mut AlbumState,
    item: &MediaItem,
) -> DownloadOutcome {
    match try_download(api, config, state, item).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::debug!("Download of {} failed: {:?}", item.url, e);
            print_error(&format!("[-] Failed to Download \"{}\": {}", item.url, e));
            DownloadOutcome::Failed
        }
    }
}

async fn try_download(
    api: &EromeClient,
    config: &Config,
    state: &mut AlbumState,
    item: &MediaItem,
) -> Result<DownloadOutcome> {
    let url = resolve_media_url(&state.album_url, &item.url)?;
    let file_name = file_name_from_url(&url)?;

    if state.is_file_known(&file_name) {
        if config.options.show_skipped_downloads {
            print_warning(&format!(
                "[#] Skipping \"{}\" [already downloaded]",
                item.url
            ));
        }
        return Ok(DownloadOutcome::Skipped);
    }

    let response = api.download_file(&url, Some(state.album_url.as_str())).await?;

    let output_path = state.base_path.join(&file_name);
    let content_length = response.content_length().unwrap_or(0);
    let progress = create_file_progress(content_length, config.options.show_downloads);
    let written = stream_to_file(response, &output_path, &progress).await?;
    tracing::debug!("Wrote {} bytes to {}", written, output_path.display());

    state.mark_file_known(file_name);

    if config.options.show_downloads {
        print_success(&format!("[#] Downloaded \"{}\"", item.url));
    }

    Ok(DownloadOutcome::Downloaded)
}

/// Resolve a page URL against the album; absolute URLs are returned as is.
fn resolve_media_url(album_url: &Url, raw: &str) -> Result<Url> {
    Ok(album_url.join(raw.trim())?)
}

/// Stream a response body to `output_path`, truncating any existing file.
///
/// The bar is cleared on success and abandoned on error, so it never outlives
/// the download. Returns the number of bytes written.
async fn stream_to_file(
    response: Response,
    output_path: &Path,
    progress: &ProgressBar,
) -> Result<u64> {
    let result = write_body(response, output_path, progress).await;

    match result {
        Ok(_) => progress.finish_and_clear(),
        Err(_) => progress.abandon(),
    }

    result
}

async fn write_body(response: Response, output_path: &Path, progress: &ProgressBar) -> Result<u64> {
    let mut file = File::create(output_path).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;

        for piece in chunk.chunks(CHUNK_SIZE) {
            file.write_all(piece).await?;
            downloaded += piece.len() as u64;
            progress.set_position(downloaded);
        }
    }

    file.flush().await?;
    Ok(downloaded)
}
