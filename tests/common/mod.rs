#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use std::sync::Arc;
use tinylink::application::services::UrlService;
use tinylink::domain::repositories::UrlRepository;
use tinylink::infrastructure::persistence::InMemoryUrlRepository;
use tinylink::routes::{app_router, build_router};
use tinylink::state::AppState;

pub const BASE_URL: &str = "http://short.test";

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let repository: Arc<dyn UrlRepository> = repo.clone();

    let url_service = Arc::new(UrlService::new(repository, 6));
    let state = AppState::new(url_service, BASE_URL);

    (state, repo)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(build_router(state)).unwrap();

    (server, repo)
}

/// Test server over the full application service, including path
/// normalization.
pub fn create_app_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let (state, repo) = create_test_state();
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    let server = TestServer::new(app).unwrap();

    (server, repo)
}

/// Shortens `url` through the API and returns the issued short code.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/api/v1/shorten")
        .json(&serde_json::json!({ "url": url }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();

    short_url
        .strip_prefix(&format!("{}/", BASE_URL))
        .unwrap()
        .to_string()
}
