//! Album download logic.

use crate::api::EromeClient;
use crate::config::Config;
use crate::download::media::download_media_file;
use crate::download::state::AlbumState;
use crate::error::Result;
use crate::fs::{ensure_dir, get_album_folder, scan_existing_files};
use crate::media::{parse_album_page, MediaType};
use crate::output::{clear_screen, print_album_header, print_album_stats};

/// Download every media file of an album, one at a time.
///
/// Host validation, page fetch, title extraction and folder setup errors abort
/// the album before any file is fetched. Per-file failures are counted in the
/// returned state instead.
pub async fn collect_album(
    api: &EromeClient,
    config: &Config,
    album_url: &str,
) -> Result<AlbumState> {
    let url = api.validate_album_url(album_url)?;

    let html = api.get_album_page(&url).await?;
    let page = parse_album_page(&html)?;

    tracing::info!(
        "Album '{}': {} videos, {} images",
        page.title,
        page.count(MediaType::Video),
        page.count(MediaType::Image)
    );

    let album_path = get_album_folder(config, &page.title)?;
    ensure_dir(&album_path)?;
    let existing_files = scan_existing_files(&album_path)?;
    tracing::debug!(
        "{} files already present in {}",
        existing_files.len(),
        album_path.display()
    );

    let mut state = AlbumState::new(url, page.title.clone(), album_path, existing_files);

    print_album_header(state.album_url.as_str(), &state.title, page.total_files());

    for item in &page.items {
        let outcome = download_media_file(api, config, &mut state, item).await;
        tracing::debug!("{} {} -> {}", item.media_type.label(), item.url, outcome);
        state.record(outcome);
    }

    if config.options.clear_screen {
        clear_screen();
    }
    print_album_stats(&state);

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::Path;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(root: &Path) -> Config {
        let mut config = Config::default();
        config.options.download_directory = root.to_path_buf();
        config.options.show_downloads = false;
        config.options.show_skipped_downloads = false;
        config
    }

    fn test_client() -> EromeClient {
        EromeClient::new("Mozilla/5.0")
            .unwrap()
            .with_album_host("127.0.0.1")
    }

    fn album_html(title: &str, videos: &[String], images: &[String]) -> String {
        let mut html = format!(
            r#"<html><head><meta property="og:title" content="{}"></head><body>"#,
            title
        );
        for video in videos {
            html.push_str(&format!(r#"<video><source src="{}"></video>"#, video));
        }
        for image in images {
            html.push_str(&format!(r#"<img class="img-back" data-src="{}">"#, image));
        }
        html.push_str("</body></html>");
        html
    }

    async fn mount_album(server: &MockServer, html: String) {
        Mock::given(method("GET"))
            .and(path("/a/AbCd"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .mount(server)
            .await;
    }

    async fn mount_file(server: &MockServer, file_path: &str, body: &[u8]) {
        Mock::given(method("GET"))
            .and(path(file_path))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_full_run_then_rerun() {
        let server = MockServer::start().await;
        let tmp = tempfile::tempdir().unwrap();
        let base = server.uri();

        let videos = vec![format!("{base}/v/one.mp4")];
        let images = vec![
            format!("{base}/i/two.jpg"),
            format!("{base}/i/three.jpg"),
            // Duplicate of the first image
            format!("{base}/i/two.jpg"),
        ];
        mount_album(&server, album_html("Holiday", &videos, &images)).await;
        mount_file(&server, "/v/one.mp4", b"one").await;
        mount_file(&server, "/i/two.jpg", b"two").await;
        mount_file(&server, "/i/three.jpg", b"three").await;

        let config = test_config(tmp.path());
        let client = test_client();
        let album_url = format!("{base}/a/AbCd");

        let state = collect_album(&client, &config, &album_url).await.unwrap();
        assert_eq!(state.title, "Holiday");
        assert_eq!(state.base_path, tmp.path().join("Holiday"));
        assert_eq!((state.complete, state.skipped, state.failed), (3, 0, 0));
        assert_eq!(
            std::fs::read(tmp.path().join("Holiday").join("three.jpg")).unwrap(),
            b"three"
        );

        // Same album again: everything is already there
        let state = collect_album(&client, &config, &album_url).await.unwrap();
        assert_eq!((state.complete, state.skipped, state.failed), (0, 3, 0));
    }

    #[tokio::test]
    async fn test_basename_collision_skips_second_url() {
        let server = MockServer::start().await;
        let tmp = tempfile::tempdir().unwrap();
        let base = server.uri();

        let videos = vec![format!("{base}/first/same.mp4")];
        let images = vec![format!("{base}/second/same.mp4")];
        mount_album(&server, album_html("Collide", &videos, &images)).await;
        mount_file(&server, "/first/same.mp4", b"first").await;
        Mock::given(method("GET"))
            .and(path("/second/same.mp4"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"second".to_vec()))
            .expect(0)
            .mount(&server)
            .await;

        let config = test_config(tmp.path());
        let state = collect_album(&test_client(), &config, &format!("{base}/a/AbCd"))
            .await
            .unwrap();

        assert_eq!((state.complete, state.skipped, state.failed), (1, 1, 0));
        assert_eq!(
            std::fs::read(tmp.path().join("Collide").join("same.mp4")).unwrap(),
            b"first"
        );
    }

    #[tokio::test]
    async fn test_unsupported_host_makes_no_request() {
        let server = MockServer::start().await;
        let tmp = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        // The server is reachable as localhost, but only 127.0.0.1 is accepted
        let port = server.address().port();
        let album_url = format!("http://localhost:{port}/a/AbCd");

        let err = collect_album(&test_client(), &test_config(tmp.path()), &album_url)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedHost { .. }));

        let err = collect_album(
            &EromeClient::new("Mozilla/5.0").unwrap(),
            &test_config(tmp.path()),
            "https://example.com/a/AbCd",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::UnsupportedHost { .. }));
    }

    #[tokio::test]
    async fn test_missing_album_page() {
        let server = MockServer::start().await;
        let tmp = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/a/AbCd"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v/one.mp4"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = collect_album(
            &test_client(),
            &test_config(tmp.path()),
            &format!("{}/a/AbCd", server.uri()),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::PageFetch { status: 404 }));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_page_without_title() {
        let server = MockServer::start().await;
        let tmp = tempfile::tempdir().unwrap();

        mount_album(&server, "<html><body>nothing</body></html>".to_string()).await;

        let err = collect_album(
            &test_client(),
            &test_config(tmp.path()),
            &format!("{}/a/AbCd", server.uri()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::MissingTitle));
    }

    #[tokio::test]
    async fn test_forbidden_file_is_counted_as_failed() {
        let server = MockServer::start().await;
        let tmp = tempfile::tempdir().unwrap();
        let base = server.uri();

        let images = vec![format!("{base}/i/ok.jpg"), format!("{base}/i/locked.jpg")];
        mount_album(&server, album_html("Mixed", &[], &images)).await;
        mount_file(&server, "/i/ok.jpg", b"ok").await;
        Mock::given(method("GET"))
            .and(path("/i/locked.jpg"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&server)
            .await;

        let state = collect_album(
            &test_client(),
            &test_config(tmp.path()),
            &format!("{base}/a/AbCd"),
        )
        .await
        .unwrap();

        assert_eq!((state.complete, state.skipped, state.failed), (1, 0, 1));
        assert!(!tmp.path().join("Mixed").join("locked.jpg").exists());
    }

    #[tokio::test]
    async fn test_unreachable_file_does_not_abort_album() {
        let server = MockServer::start().await;
        let tmp = tempfile::tempdir().unwrap();
        let base = server.uri();

        // Reserve a port, then free it so nothing is listening there
        let dead_port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let videos = vec![format!("http://127.0.0.1:{dead_port}/v/dead.mp4")];
        let images = vec![format!("{base}/i/alive.jpg")];
        mount_album(&server, album_html("Flaky", &videos, &images)).await;
        mount_file(&server, "/i/alive.jpg", b"alive").await;

        let state = collect_album(
            &test_client(),
            &test_config(tmp.path()),
            &format!("{base}/a/AbCd"),
        )
        .await
        .unwrap();

        assert_eq!((state.complete, state.skipped, state.failed), (1, 0, 1));
        assert_eq!(
            std::fs::read(tmp.path().join("Flaky").join("alive.jpg")).unwrap(),
            b"alive"
        );
        assert!(!tmp.path().join("Flaky").join("dead.mp4").exists());
    }
}
