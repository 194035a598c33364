//! Chat API Tests

use axum::http::StatusCode;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use pretty_assertions::assert_eq;

use crate::common::TestApp;

/// Created chats read back with the trimmed title
#[tokio::test]
async fn test_create_then_get_returns_same_title() {
    let app = TestApp::new();

    for _ in 0..10 {
        let title: String = Sentence(1..8).fake();

        let created = app.create_chat(&format!("\t{}  ", title)).await;
        assert_eq!(created.status, StatusCode::CREATED);
        assert_eq!(created.content_type.as_deref(), Some("application/json"));
        let id = created.json()["id"].as_i64().unwrap();

        let fetched = app.get_chat(id, Some("{}")).await;
        assert_eq!(fetched.status, StatusCode::OK);
        assert_eq!(fetched.json()["title"], title.as_str());
    }
}

/// Titles are measured in code points
#[tokio::test]
async fn test_title_limit_uses_code_points() {
    let app = TestApp::new();

    let response = app.create_chat(&"ж".repeat(200)).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app.create_chat(&"ж".repeat(201)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

/// Blank titles are rejected
#[tokio::test]
async fn test_blank_title_is_rejected() {
    let app = TestApp::new();

    let response = app.create_chat("   ").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "title: is required");
}

/// Unknown fields and trailing garbage are invalid JSON
#[tokio::test]
async fn test_create_chat_json_strictness() {
    let app = TestApp::new();

    let response = app
        .request(axum::http::Method::POST, "/chats/", Some(r#"{"title":"x","extra":1}"#))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "invalid json");

    let response = app
        .request(axum::http::Method::POST, "/chats/", Some(r#"{"title":"x"} }"#))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

/// Limit defaults to 20 and is bounded by 100
#[tokio::test]
async fn test_get_chat_limit_rules() {
    let app = TestApp::new();
    let id = app.create_chat("busy").await.json()["id"].as_i64().unwrap();
    for n in 0..25 {
        app.send_message(id, &format!("message {}", n)).await;
    }

    let response = app.get_chat(id, Some("{}")).await;
    assert_eq!(response.json()["messages"].as_array().unwrap().len(), 20);

    let response = app.get_chat(id, Some(r#"{"limit":0}"#)).await;
    assert_eq!(response.json()["messages"].as_array().unwrap().len(), 20);

    let response = app.get_chat(id, Some(r#"{"limit":100}"#)).await;
    assert_eq!(response.json()["messages"].as_array().unwrap().len(), 25);

    let response = app.get_chat(id, Some(r#"{"limit":150}"#)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.get_chat(id, Some(r#"{"limit":-1}"#)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

/// Messages come back oldest first and never more than the limit
#[tokio::test]
async fn test_get_chat_returns_oldest_messages_first() {
    let app = TestApp::new();
    let id = app.create_chat("ordered").await.json()["id"].as_i64().unwrap();
    for n in 0..5 {
        app.send_message(id, &format!("m{}", n)).await;
    }

    let body = app.get_chat(id, Some(r#"{"limit":3}"#)).await.json();
    let messages = body["messages"].as_array().unwrap();

    let texts: Vec<&str> = messages.iter().map(|m| m["text"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["m0", "m1", "m2"]);

    let timestamps: Vec<&str> = messages
        .iter()
        .map(|m| m["created_at"].as_str().unwrap())
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort();
    assert_eq!(timestamps, sorted);
}

/// Deleting twice returns 404 the second time
#[tokio::test]
async fn test_delete_chat_twice() {
    let app = TestApp::new();
    let id = app.create_chat("short lived").await.json()["id"].as_i64().unwrap();

    let first = app.delete_chat(id).await;
    assert_eq!(first.status, StatusCode::NO_CONTENT);
    assert!(first.body.is_empty());

    let second = app.delete_chat(id).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);

    assert_eq!(app.get_chat(id, Some("{}")).await.status, StatusCode::NOT_FOUND);
}

/// Deleting an id that never existed is 404, not 500
#[tokio::test]
async fn test_delete_unknown_chat() {
    let app = TestApp::new();

    assert_eq!(app.delete_chat(12345).await.status, StatusCode::NOT_FOUND);
}

/// A null title reads as missing
#[tokio::test]
async fn test_null_title_is_required() {
    let app = TestApp::new();

    let response = app
        .request(axum::http::Method::POST, "/chats/", Some(r#"{"title":null}"#))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "title: is required");
}

/// Retrieval needs a JSON body too
#[tokio::test]
async fn test_get_chat_with_empty_body_is_invalid_json() {
    let app = TestApp::new();
    let id = app.create_chat("bodiless").await.json()["id"].as_i64().unwrap();

    let response = app.get_chat(id, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "invalid json");
}
