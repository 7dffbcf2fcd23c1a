#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use deskline_api::{ApiClient, Error, ListQuery, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri(), &TransportConfig::default()).unwrap();
    (server, client)
}

fn tag_json(id: &str, name: &str, archived: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "color": "#ff8800",
        "is_archived": archived,
        "created_at": "2026-01-10T09:00:00Z",
        "updated_at": "2026-01-10T09:00:00Z"
    })
}

fn ticket_json(id: &str, subject: &str) -> serde_json::Value {
    json!({
        "id": id,
        "subject": subject,
        "description": null,
        "status": "open",
        "user_id": "u-1",
        "channel_id": null,
        "is_archived": false,
        "created_at": "2026-01-10T09:00:00Z",
        "updated_at": "2026-01-10T09:00:00Z"
    })
}

fn page_meta(current_page: u32, last_page: u32, total: u64) -> serde_json::Value {
    json!({ "pagination": {
        "current_page": current_page, "per_page": 25,
        "from": 1, "to": 25, "total": total, "last_page": last_page
    }})
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let (server, client) = setup().await;

    let admin = json!({
        "id": "a-1",
        "name": "Dana",
        "email": "dana@example.com",
        "role": "super_admin",
        "is_active": true,
        "created_at": "2026-01-10T09:00:00Z",
        "updated_at": "2026-01-10T09:00:00Z"
    });

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({
            "email": "dana@example.com",
            "password": "test-password"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": admin, "message": "ok" })),
        )
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "test-password".to_string().into();
    let admin = client.login("dana@example.com", &secret).await.unwrap();

    assert_eq!(admin.email, "dana@example.com");
    assert_eq!(admin.role, deskline_api::types::AdminRole::SuperAdmin);
}

#[tokio::test]
async fn test_login_bad_credentials() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "invalid credentials" })),
        )
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "wrong".to_string().into();
    let result = client.login("dana@example.com", &secret).await;

    match result {
        Err(Error::Unauthorized { ref message }) => {
            assert_eq!(message, "invalid credentials");
        }
        other => panic!("expected Unauthorized, got: {other:?}"),
    }
}

// ── Listing tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_tickets_with_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(query_param("search", "printer"))
        .and(query_param("is_archived", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ticket_json("t-1", "Printer on fire")],
            "message": "ok",
            "meta": page_meta(1, 1, 1)
        })))
        .mount(&server)
        .await;

    let query = ListQuery {
        search: Some("printer".into()),
        is_archived: Some(false),
        ..ListQuery::default()
    };
    let page = client.list_tickets(&query).await.unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.records[0].subject, "Printer on fire");
    assert!(!page.has_more());
}

#[tokio::test]
async fn test_paginate_all_walks_every_page() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ticket_json("t-1", "one")],
            "message": "ok",
            "meta": page_meta(1, 2, 2)
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ticket_json("t-2", "two")],
            "message": "ok",
            "meta": page_meta(2, 2, 2)
        })))
        .mount(&server)
        .await;

    let client = &client;
    let all = client
        .paginate_all(&ListQuery::default(), |q| async move {
            client.list_tickets(&q).await
        })
        .await
        .unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, "t-1");
    assert_eq!(all[1].id, "t-2");
}

// ── Error taxonomy tests ────────────────────────────────────────────

#[tokio::test]
async fn test_status_400_maps_to_bad_request() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/ticket-tags"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "name is required" })),
        )
        .mount(&server)
        .await;

    let result = client
        .create_ticket_tag(&deskline_api::types::CreateTicketTag {
            name: String::new(),
            color: None,
        })
        .await;

    match result {
        Err(Error::BadRequest { ref message }) => assert_eq!(message, "name is required"),
        other => panic!("expected BadRequest, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_status_403_maps_to_forbidden() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/admins"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "message": "super admin only" })),
        )
        .mount(&server)
        .await;

    let result = client.list_admins(&ListQuery::default()).await;
    assert!(matches!(result, Err(Error::Forbidden { .. })), "got: {result:?}");
}

#[tokio::test]
async fn test_status_404_maps_to_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tickets/nope"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "ticket not found" })),
        )
        .mount(&server)
        .await;

    let result = client.get_ticket("nope").await;
    assert!(matches!(result, Err(Error::NotFound { .. })), "got: {result:?}");
}

#[tokio::test]
async fn test_status_409_maps_to_conflict() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/ticket-tags"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "tag already exists" })),
        )
        .mount(&server)
        .await;

    let result = client
        .create_ticket_tag(&deskline_api::types::CreateTicketTag {
            name: "Billing".into(),
            color: None,
        })
        .await;
    assert!(matches!(result, Err(Error::Conflict { .. })), "got: {result:?}");
}

#[tokio::test]
async fn test_status_500_maps_to_internal() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client.list_tickets(&ListQuery::default()).await;

    match result {
        Err(Error::Internal { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Internal, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_required_field_is_bad_response() {
    let (server, client) = setup().await;

    // `subject` is missing, so the record fails schema decoding.
    Mock::given(method("GET"))
        .and(path("/api/tickets/t-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": "t-1", "status": "open" },
            "message": "ok"
        })))
        .mount(&server)
        .await;

    let result = client.get_ticket("t-1").await;
    assert!(matches!(result, Err(Error::BadResponse { .. })), "got: {result:?}");
}

#[tokio::test]
async fn test_null_data_where_record_expected_is_bad_response() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tickets/t-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": null, "message": "nothing here" })),
        )
        .mount(&server)
        .await;

    let result = client.get_ticket("t-1").await;
    assert!(matches!(result, Err(Error::BadResponse { .. })), "got: {result:?}");
}

#[tokio::test]
async fn test_non_json_body_with_multibyte_char_at_preview_boundary() {
    let (server, client) = setup().await;

    // 199 ASCII bytes followed by a two-byte char straddling byte 200. The
    // diagnostic preview must back off to a char boundary, not slice mid-char.
    let mut body = "x".repeat(199);
    body.push('é');
    body.push_str(" trailing garbage, definitely not JSON");

    Mock::given(method("GET"))
        .and(path("/api/tickets/t-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .mount(&server)
        .await;

    match client.get_ticket("t-1").await {
        Err(Error::BadResponse { body: got, .. }) => assert_eq!(got, body),
        other => panic!("expected BadResponse, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_with_multibyte_char_at_preview_boundary() {
    let (server, client) = setup().await;

    let mut body = "x".repeat(199);
    body.push('é');
    body.push_str(" more text past the truncation point");

    Mock::given(method("GET"))
        .and(path("/api/tickets/t-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string(body))
        .mount(&server)
        .await;

    match client.get_ticket("t-1").await {
        Err(Error::Internal { status, message }) => {
            assert_eq!(status, 500);
            // Truncated one byte short of the limit, at the char boundary.
            assert_eq!(message.len(), 199);
            assert!(message.chars().all(|c| c == 'x'), "got: {message}");
        }
        other => panic!("expected Internal, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_fetch_error() {
    // Port 1 is never listening.
    let client = ApiClient::new("http://127.0.0.1:1", &TransportConfig::default()).unwrap();

    let result = client.get_ticket("t-1").await;
    assert!(matches!(result, Err(Error::Fetch(_))), "got: {result:?}");
}

// ── Soft-delete tests ───────────────────────────────────────────────

#[tokio::test]
async fn test_archive_and_restore_tag() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/ticket-tags/tag-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": null, "message": "archived" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/ticket-tags/tag-1/restore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": tag_json("tag-1", "Test Ticket tag", false),
            "message": "restored"
        })))
        .mount(&server)
        .await;

    client.archive_ticket_tag("tag-1").await.unwrap();
    let restored = client.restore_ticket_tag("tag-1").await.unwrap();

    assert_eq!(restored.name, "Test Ticket tag");
    assert!(!restored.is_archived);
}
