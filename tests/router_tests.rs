use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use imgurappist::api::{AppState, create_router};
use imgurappist::imgur::Client;
use imgurappist::picker::PLACEHOLDER_URL;

const SINGLE_IMAGE_RESPONSE: &str = r#"{"data":[{"id":"Lh6MuPp","link":"http:\/\/i.imgur.com\/Lh6MuPp.jpg","is_album":false}],"success":true,"status":200}"#;

const ALBUM_RESPONSE: &str = r#"{"data":[{"id":"Wu0zw","link":"http://imgur.com/a/Wu0zw","is_album":true,"images":[{"id":"LAobnLK","link":"http://i.imgur.com/LAobnLK.jpg"}]}],"success":true,"status":200}"#;

async fn app(server: &MockServer, assets_dir: &std::path::Path) -> Router {
    let imgur = Client::new(None, "clientID", "clientSecret")
        .with_base_url(&server.uri())
        .unwrap();
    create_router(Arc::new(AppState { imgur }), assets_dir)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn test_home_page() {
    let server = MockServer::start().await;
    let assets = tempfile::tempdir().unwrap();

    let (status, body) = get(app(&server, assets.path()).await, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("imgurappist"));
}

#[tokio::test]
async fn test_overlay_page_uses_search_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gallery/search/top/0"))
        .and(query_param("q", "paris"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SINGLE_IMAGE_RESPONSE, "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let assets = tempfile::tempdir().unwrap();

    let (status, body) = get(app(&server, assets.path()).await, "/paris").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("url('http://i.imgur.com/Lh6MuPp.jpg')"));
    assert!(body.contains(r#"href="/paris""#));
    assert!(body.contains("/assets/dickbutt.png"));
}

#[tokio::test]
async fn test_overlay_page_album_uses_first_image() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gallery/search/top/0"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ALBUM_RESPONSE, "application/json"))
        .mount(&server)
        .await;
    let assets = tempfile::tempdir().unwrap();

    let (status, body) = get(app(&server, assets.path()).await, "/keanu").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("url('http://i.imgur.com/LAobnLK.jpg')"));
}

#[tokio::test]
async fn test_overlay_page_decodes_place() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gallery/search/top/0"))
        .and(query_param("q", "new york"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SINGLE_IMAGE_RESPONSE, "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let assets = tempfile::tempdir().unwrap();

    let (status, body) = get(app(&server, assets.path()).await, "/new%20york").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>new york</title>"));
    assert!(body.contains(r#"href="/new%20york""#));
}

#[tokio::test]
async fn test_overlay_page_falls_back_on_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_raw(
            r#"{"data":{"error":"Imgur is over capacity!","request":"\/3\/gallery\/search\/top\/0","method":"GET"},"success":false,"status":503}"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    let assets = tempfile::tempdir().unwrap();

    let (status, body) = get(app(&server, assets.path()).await, "/atlantis").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(PLACEHOLDER_URL));
}

#[tokio::test]
async fn test_overlay_page_empty_results_use_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gallery/search/top/0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"data":[],"success":true,"status":200}"#, "application/json"),
        )
        .mount(&server)
        .await;
    let assets = tempfile::tempdir().unwrap();

    let (_, body) = get(app(&server, assets.path()).await, "/nowhere").await;
    assert!(body.contains(PLACEHOLDER_URL));
}

#[tokio::test]
async fn test_assets_are_served() {
    let server = MockServer::start().await;
    let assets = tempfile::tempdir().unwrap();
    std::fs::write(assets.path().join("dickbutt.png"), b"not really a png").unwrap();

    let (status, body) = get(app(&server, assets.path()).await, "/assets/dickbutt.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "not really a png");

    let (status, _) = get(app(&server, assets.path()).await, "/assets/missing.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    // the asset requests never reach imgur
    assert!(server.received_requests().await.unwrap().is_empty());
}
