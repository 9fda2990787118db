use std::io::Cursor;

use axum::{body::Body, routing::get, Router};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use profilecard_infra::{AvatarError, AvatarFetcher};

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba([200, 40, 90, 255])));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("encode png");
    buf
}

async fn start_avatar_server(png: Vec<u8>) -> (std::net::SocketAddr, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route(
            "/avatar.png",
            get(move || {
                let data = png.clone();
                async move { Body::from(data) }
            }),
        )
        .route(
            "/broken.png",
            get(|| async { Body::from(b"<html>not an image</html>".to_vec()) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

fn fetcher() -> AvatarFetcher {
    AvatarFetcher::new(profilecard_infra::default_http_client().expect("http client"))
}

#[tokio::test]
async fn remote_avatar_is_cropped_to_a_circle() {
    let (addr, _server) = start_avatar_server(png_bytes(80, 40)).await;

    let img = fetcher()
        .fetch_avatar(&format!("http://{addr}/avatar.png"), 48)
        .await
        .expect("avatar loads");

    assert_eq!((img.width, img.height), (48, 48));
    assert_eq!(img.rgba.len(), 48 * 48 * 4);
    assert_eq!(img.pixel(0, 0).unwrap()[3], 0, "corners are masked");
    assert_eq!(img.pixel(24, 24).unwrap()[3], 255, "center is opaque");
}

#[tokio::test]
async fn missing_avatar_reports_http_status() {
    let (addr, _server) = start_avatar_server(png_bytes(4, 4)).await;
    let url = format!("http://{addr}/missing.png");

    match fetcher().fetch_avatar(&url, 16).await {
        Err(AvatarError::Status { status, url: got }) => {
            assert_eq!(status, 404);
            assert_eq!(got, url);
        }
        other => panic!("expected 404 status error, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let (addr, _server) = start_avatar_server(png_bytes(4, 4)).await;

    let err = fetcher()
        .fetch_avatar(&format!("http://{addr}/broken.png"), 16)
        .await
        .unwrap_err();
    assert!(matches!(err, AvatarError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn local_file_references_are_read_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("me.png");
    std::fs::write(&path, png_bytes(10, 10)).unwrap();

    let plain = fetcher()
        .fetch_avatar(&path.to_string_lossy(), 20)
        .await
        .expect("plain path loads");
    assert_eq!(plain.width, 20);

    let url = format!("file://{}", path.to_string_lossy());
    let via_url = fetcher().fetch_avatar(&url, 20).await.expect("file url loads");
    assert_eq!(plain, via_url);
}

#[tokio::test]
async fn file_urls_are_percent_decoded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("my pic.png");
    std::fs::write(&path, png_bytes(10, 10)).unwrap();

    let url = reqwest::Url::from_file_path(&path).unwrap();
    assert!(url.as_str().ends_with("my%20pic.png"));

    let img = fetcher()
        .fetch_avatar(url.as_str(), 20)
        .await
        .expect("encoded file url loads");
    assert_eq!(img.width, 20);
}

#[cfg(unix)]
#[tokio::test]
async fn file_urls_accept_localhost_and_any_scheme_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("me.png");
    std::fs::write(&path, png_bytes(10, 10)).unwrap();

    for url in [
        format!("file://localhost{}", path.to_string_lossy()),
        format!("FILE://{}", path.to_string_lossy()),
    ] {
        let img = fetcher()
            .fetch_avatar(&url, 20)
            .await
            .unwrap_or_else(|e| panic!("{url} should load: {e:?}"));
        assert_eq!(img.width, 20);
    }
}

#[tokio::test]
async fn missing_local_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.png");

    let err = fetcher()
        .fetch_avatar(&path.to_string_lossy(), 20)
        .await
        .unwrap_err();
    assert!(matches!(err, AvatarError::Io(_)));
}
