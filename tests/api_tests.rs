use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::json;

use lonelyweb::{
    models::{embed_url_for, VideoResponse},
    routes::{create_router, AppState},
    services::{DatasetSource, VideoStore},
};

const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

async fn create_test_server(source: DatasetSource) -> TestServer {
    let store = VideoStore::load(source).await.unwrap();
    let app = create_router(AppState::new(store), STATIC_DIR);
    TestServer::new(app).unwrap()
}

async fn three_video_server() -> TestServer {
    let dataset = json!([
        {"videoId": "AAAAAAAAAAA", "url": "https://www.youtube.com/watch?v=AAAAAAAAAAA", "title": "first", "channelTitle": "one", "viewCount": 1},
        {"videoId": "BBBBBBBBBBB", "url": "https://www.youtube.com/watch?v=BBBBBBBBBBB", "title": "second", "channelTitle": "two", "viewCount": 22},
        {"videoId": "CCCCCCCCCCC", "url": "https://www.youtube.com/watch?v=CCCCCCCCCCC", "title": "third", "channelTitle": "three", "viewCount": 0}
    ]);
    create_test_server(DatasetSource::json(dataset.to_string())).await
}

async fn empty_server() -> TestServer {
    create_test_server(DatasetSource::json("[]")).await
}

#[tokio::test]
async fn test_health_check() {
    let server = three_video_server().await;
    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["videos"], 3);
}

#[tokio::test]
async fn test_next_video_json_returns_loaded_video() {
    let server = three_video_server().await;
    let ids = ["AAAAAAAAAAA", "BBBBBBBBBBB", "CCCCCCCCCCC"];

    for _ in 0..20 {
        let response = server.get("/next-video-json").await;
        response.assert_status_ok();

        let video: VideoResponse = response.json();
        assert!(ids.contains(&video.video_id.as_str()), "unexpected id {}", video.video_id);
        assert_eq!(video.embed_url, embed_url_for(&video.video_id));
        assert_eq!(
            video.url,
            format!("https://www.youtube.com/watch?v={}", video.video_id)
        );
    }
}

#[tokio::test]
async fn test_next_video_json_field_names() {
    let server = three_video_server().await;
    let response = server.get("/next-video-json").await;

    let body: serde_json::Value = response.json();
    let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["channelTitle", "embedUrl", "title", "url", "videoId", "viewCount"]
    );
}

#[tokio::test]
async fn test_next_video_json_on_empty_dataset_is_500() {
    let server = empty_server().await;
    let response = server.get("/next-video-json").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "error": "no videos found in the dataset" }));
}

#[tokio::test]
async fn test_index_renders_count_and_video() {
    let server = three_video_server().await;
    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<strong>3</strong>"));
    assert!(html.contains(r#"id="video-section""#));
    assert!(html.contains("https://www.youtube.com/embed/"));
    assert!(html.contains(r#"<p id="error-message" class="error" hidden></p>"#));
}

#[tokio::test]
async fn test_index_on_empty_dataset_shows_error() {
    let server = empty_server().await;
    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("no videos found in the dataset"));
    assert!(!html.contains(r#"id="video-section""#));
    assert!(html.contains("<strong>0</strong>"));
}

#[tokio::test]
async fn test_server_keeps_serving_after_errors() {
    let server = empty_server().await;

    for _ in 0..3 {
        server
            .get("/next-video-json")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_sql_dataset_end_to_end() {
    let script = "CREATE TABLE videos (
            video_id TEXT PRIMARY KEY,
            url TEXT NOT NULL UNIQUE,
            title TEXT,
            channel_title TEXT,
            view_count INTEGER
        );
        INSERT INTO videos VALUES ('sqlonly0001', 'https://www.youtube.com/watch?v=sqlonly0001', 'from sql', NULL, 5);";
    let server = create_test_server(DatasetSource::sql(script)).await;

    let video: VideoResponse = server.get("/next-video-json").await.json();
    assert_eq!(video.video_id, "sqlonly0001");
    assert_eq!(video.title, "from sql");
    assert_eq!(video.channel_title, "");
    assert_eq!(video.view_count, 5);
}

#[tokio::test]
async fn test_static_files_are_served() {
    let server = three_video_server().await;

    let response = server.get("/static/app.js").await;
    response.assert_status_ok();
    assert!(response.text().contains("/next-video-json"));

    server.get("/static/missing.js").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = three_video_server().await;
    let response = server.get("/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "no route for /nope");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = three_video_server().await;
    let id = "6f1c2d8e-8a53-4b51-9f0e-2a7a1c3b4d5e";

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(id),
        )
        .await;
    assert_eq!(response.headers().get("x-request-id").unwrap(), id);

    let response = server.get("/health").await;
    let generated = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(generated.len(), 36);
}

#[tokio::test]
async fn test_load_failure_leaves_nothing_to_serve() {
    let result = VideoStore::load(DatasetSource::sql("")).await;
    assert!(result.is_err());
}
