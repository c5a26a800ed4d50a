//! Integration tests using a mock HTTP server
//!
//! Tests the full flow: login → collection fetch → schema inference →
//! rendered declaration.

use serde_json::json;
use socie_sdk::cli::infer_from_file;
use socie_sdk::client::{ClientConfig, Credentials, SocieClient};
use socie_sdk::schema::{generate_struct, StructGenerator, TypeTag};
use socie_sdk::Error;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> SocieClient {
    SocieClient::new(ClientConfig::new("community1").with_base_url(server.uri()))
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login/socie"))
        .and(header("platform", "website"))
        .and(body_partial_json(json!({"appType": "CHURCH"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "access_token": "test-token"
        })))
        .mount(server)
        .await;
}

// ============================================================================
// Client Integration Tests
// ============================================================================

#[tokio::test]
async fn test_login_attaches_bearer_token() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/communities/community1/modules"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let mut client = test_client(&server);
    client
        .login(&Credentials::new("user@example.com", "secret"))
        .await
        .unwrap();
    assert!(client.is_logged_in());

    let records = client.collection("modules").await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_login_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login/socie"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    let mut client = test_client(&server);
    let result = client
        .login(&Credentials::new("user@example.com", "wrong"))
        .await;

    assert!(matches!(result, Err(Error::Auth { .. })));
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_collection_propagates_http_status() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/communities/community1/secrets"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let mut client = test_client(&server);
    client
        .login(&Credentials::new("user@example.com", "secret"))
        .await
        .unwrap();

    let result = client.collection("secrets").await;
    assert!(matches!(
        result,
        Err(Error::HttpStatus { status: 403, .. })
    ));
}

#[tokio::test]
async fn test_collection_rejects_non_array() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/communities/community1/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "x"})))
        .mount(&server)
        .await;

    let mut client = test_client(&server);
    client
        .login(&Credentials::new("user@example.com", "secret"))
        .await
        .unwrap();

    let result = client.collection("profile").await;
    assert!(matches!(result, Err(Error::InvalidSample { .. })));
}

#[tokio::test]
async fn test_modules_typed_accessor() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/communities/community1/modules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "News",
                "community_id": "community1",
                "icon": "news.png",
                "_id": "mod-1",
                "groups": "all",
                "type": "NEWS",
                "isEnabled": true,
                "modified": "2024-03-27T12:00:00Z",
                "created": "2024-03-26T14:30:00Z",
                "iconFa": "fa-news",
                "orderNumber": 1
            }
        ])))
        .mount(&server)
        .await;

    let mut client = test_client(&server);
    client
        .login(&Credentials::new("user@example.com", "secret"))
        .await
        .unwrap();

    let found = client.module_by_name("News").await.unwrap().unwrap();
    assert_eq!(found.id, "mod-1");
    assert!(found.is_enabled);
    assert!(found.pages.is_none());

    let missing = client.module_by_name("Nope").await.unwrap();
    assert!(missing.is_none());
}

// ============================================================================
// End-to-End: sample retrieval → struct generation
// ============================================================================

#[tokio::test]
async fn test_generate_struct_from_fetched_collection() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/communities/community1/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"title": "Service", "starts": "2024-03-27T12:00:00Z", "seats": 100},
            {"title": "Choir", "starts": "2024-03-28T19:30:00+02:00", "seats": 12.5},
            {"title": "Picnic", "starts": null, "location": "Park"}
        ])))
        .mount(&server)
        .await;

    let mut client = test_client(&server);
    client
        .login(&Credentials::new("user@example.com", "secret"))
        .await
        .unwrap();

    let records = client.collection("events").await.unwrap();

    let schema = StructGenerator::new().generate("Event", &records);
    let title = schema.get_field("title").unwrap();
    assert_eq!(title.type_tag, TypeTag::String);
    assert!(!title.optional);

    // mixed integer/float widens to float; absent in record 3 makes it optional
    let seats = schema.get_field("seats").unwrap();
    assert_eq!(seats.type_tag, TypeTag::Float);
    assert!(seats.optional);

    let starts = schema.get_field("starts").unwrap();
    assert_eq!(starts.type_tag, TypeTag::Timestamp);
    assert!(starts.optional);

    // identical sample renders byte-identical output
    let first = generate_struct("Event", &records);
    let second = generate_struct("Event", &records);
    assert_eq!(first, second);
    assert!(first.starts_with("#[derive(Debug, Clone, Serialize, Deserialize)]\n"));
    assert!(first.contains("pub title: String,"));
    assert!(first.contains("pub starts: Option<DateTime<Utc>>,"));
}

#[test]
fn test_infer_from_file_matches_library_call() {
    use std::io::Write;

    let records = [
        json!({"name": "Alice", "age": 25, "isEnabled": true}),
        json!({"name": "Bob", "age": 30, "city": "New York"}),
    ];

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", json!(records)).unwrap();

    // the offline CLI path and the library call agree
    let code = infer_from_file(file.path(), "Person").unwrap();
    assert_eq!(code, generate_struct("Person", &records));
    assert!(code.contains("pub name: String,"));
    assert!(code.contains("pub city: Option<String>,"));
}

#[test]
fn test_infer_from_file_rejects_non_array() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", json!({"name": "Alice"})).unwrap();

    let result = infer_from_file(file.path(), "Person");
    assert!(matches!(result, Err(Error::InvalidSample { .. })));
}

#[test]
fn test_infer_from_file_missing_file() {
    let result = infer_from_file(std::path::Path::new("does-not-exist.json"), "Person");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("reading sample file"));
}
