use std::time::Duration;

use notehub_core::{NotesResult, Tag};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{ClientError, NoteHubClient, NotesApi};

fn client_for(server: &MockServer, token: Option<&str>) -> NoteHubClient {
    NoteHubClient::new(&server.uri(), token.map(str::to_owned), Duration::from_secs(5)).unwrap()
}

fn notes_body() -> serde_json::Value {
    serde_json::json!({
        "notes": [{
            "id": "n1",
            "title": "Quarterly review",
            "content": "Prepare slides",
            "createdAt": "2025-07-01T10:00:00.000Z",
            "updatedAt": "2025-07-01T10:00:00.000Z",
            "tag": "Work"
        }],
        "totalPages": 2
    })
}

#[tokio::test]
async fn test_fetch_first_page_with_tag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .and(query_param("page", "1"))
        .and(query_param("perPage", "8"))
        .and(query_param("tag", "Work"))
        .and(query_param_is_missing("search"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(notes_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-token"));
    let result = client.fetch_notes(1, 8, None, Some(Tag::Work)).await.unwrap();

    assert_eq!(result.total_pages, 2);
    assert_eq!(result.notes[0].title, "Quarterly review");
    assert_eq!(result.notes[0].tag, Tag::Work);
}

#[tokio::test]
async fn test_fetch_without_tag_omits_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .and(query_param_is_missing("tag"))
        .and(query_param_is_missing("search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::to_value(NotesResult::default()).unwrap()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let result = client.fetch_notes(1, 8, Some("   "), None).await.unwrap();
    assert!(result.notes.is_empty());
}

#[tokio::test]
async fn test_fetch_sends_search_term() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .and(query_param("search", "groceries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(notes_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    client.fetch_notes(2, 8, Some("groceries"), None).await.unwrap();
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.fetch_notes(1, 8, None, None).await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));
    assert!(matches!(err, ClientError::HttpStatus { ref body, .. } if body == "Unauthorized"));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.fetch_notes(1, 8, None, None).await.unwrap_err();
    assert!(matches!(err, ClientError::JsonParse { .. }));
    assert_eq!(err.status_code(), None);
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client =
        NoteHubClient::new("https://api.example.com/api/", None, Duration::from_secs(1)).unwrap();
    assert_eq!(client.base_url(), "https://api.example.com/api");
}

#[test]
fn test_debug_masks_token() {
    let client =
        NoteHubClient::new("https://api.example.com", Some("secret".to_owned()), Duration::from_secs(1))
            .unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("secret"));
}

#[test]
fn test_truncate_respects_char_boundary() {
    assert_eq!(crate::truncate("hello", 10), "hello");
    assert_eq!(crate::truncate("héllo", 2), "h");
}
