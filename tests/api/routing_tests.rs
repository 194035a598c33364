//! Routing Tests

use axum::http::{Method, StatusCode};

use crate::common::TestApp;

#[tokio::test]
async fn test_get_collection_is_method_not_allowed() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/chats/", None).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_nested_messages_requires_trailing_slash() {
    let app = TestApp::new();
    let chat_id = app.create_chat("slashes").await.json()["id"].as_i64().unwrap();
    let body = r#"{"text":"hello"}"#;

    let without = app
        .request(Method::POST, &format!("/chats/{}/messages", chat_id), Some(body))
        .await;
    assert_eq!(without.status, StatusCode::NOT_FOUND);

    let with = app
        .request(Method::POST, &format!("/chats/{}/messages/", chat_id), Some(body))
        .await;
    assert_eq!(with.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_malformed_ids_are_bad_requests() {
    let app = TestApp::new();

    for uri in ["/chats/-1", "/chats/abc", "/chats/1.5"] {
        let response = app.request(Method::GET, uri, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(response.json()["message"], "invalid chat id");
    }
}

#[tokio::test]
async fn test_wrong_method_on_single_chat() {
    let app = TestApp::new();

    let response = app.request(Method::PATCH, "/chats/1", Some("{}")).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_sub_resource_is_not_found() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/chats/1/members/", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_percent_encoded_paths_are_decoded() {
    let app = TestApp::new();
    let chat_id = app.create_chat("encoded").await.json()["id"].as_i64().unwrap();
    let encoded: String = chat_id.to_string().bytes().map(|b| format!("%{:02X}", b)).collect();

    let response = app
        .request(
            Method::POST,
            &format!("/chats/{}/messages/", encoded),
            Some(r#"{"text":"hello"}"#),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app
        .request(Method::GET, &format!("/chats/{}", encoded), Some("{}"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["messages"][0]["text"], "hello");
}
