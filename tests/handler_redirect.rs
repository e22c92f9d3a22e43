mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_redirect_success() {
    let (server, _repo) = common::create_test_server();

    let code = common::shorten(&server, "https://example.com/page").await;

    let response = server.get(&format!("/{}", code)).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/page");
}

#[tokio::test]
async fn test_redirect_returns_original_url_unchanged() {
    let (server, _repo) = common::create_test_server();

    let original = "https://www.Example.com/Path?b=2&a=1#frag";
    let code = common::shorten(&server, original).await;

    let response = server.get(&format!("/{}", code)).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), original);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "error": "URL not found" }));
}

#[tokio::test]
async fn test_redirect_increments_access_count() {
    let (server, repo) = common::create_test_server();

    let code = common::shorten(&server, "https://example.com").await;

    for expected in 1..=3 {
        server
            .get(&format!("/{}", code))
            .await
            .assert_status(StatusCode::FOUND);

        let records = repo.records().await;
        assert_eq!(records[0].access_count, expected);
    }
}

#[tokio::test]
async fn test_shorten_again_does_not_touch_access_count() {
    let (server, repo) = common::create_test_server();

    let code = common::shorten(&server, "https://example.com").await;
    server.get(&format!("/{}", code)).await;

    common::shorten(&server, "https://example.com").await;

    assert_eq!(repo.records().await[0].access_count, 1);
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (server, _repo) = common::create_test_server();

    let code = common::shorten(&server, "https://example.com").await;
    let swapped: String = code
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect();

    // Codes made only of digits have no case variant.
    if swapped != code {
        server
            .get(&format!("/{}", swapped))
            .await
            .assert_status_not_found();
    }
}
