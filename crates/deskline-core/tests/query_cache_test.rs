#![allow(clippy::unwrap_used)]
// Integration tests for the Desk facade: cache-through reads, mutation
// invalidation, and prefetch error policy, all against a wiremock server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use deskline_core::{
    CacheKey, ClientConfig, CoreError, CreateTicketTag, Desk, EntityKind, ListQuery, SessionStore,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Desk, tempfile::TempDir) {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = ClientConfig::new(server.uri().parse().unwrap());
    let store = SessionStore::new(dir.path().join("session.json"));
    let desk = Desk::new(config, store).unwrap();
    (server, desk, dir)
}

fn tag_json(id: &str, name: &str, archived: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "color": null,
        "is_archived": archived,
        "created_at": "2026-02-01T08:00:00Z",
        "updated_at": "2026-02-01T08:00:00Z"
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
        "created_at": "2026-02-01T08:00:00Z",
        "updated_at": "2026-02-01T08:00:00Z"
    })
}

fn listing(records: Vec<serde_json::Value>) -> serde_json::Value {
    json!({ "data": records, "message": "ok" })
}

// ── Cache-through reads ─────────────────────────────────────────────

#[tokio::test]
async fn repeated_reads_hit_the_server_once() {
    let (server, desk, _dir) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(listing(vec![ticket_json("t-1", "one")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let queries = desk.queries();
    let first = queries.tickets(&ListQuery::default()).await.unwrap();
    let second = queries.tickets(&ListQuery::default()).await.unwrap();

    // Same shared snapshot, fetched once.
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    server.verify().await;
}

#[tokio::test]
async fn distinct_filters_are_distinct_cache_entries() {
    let (server, desk, _dir) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![])))
        .expect(2)
        .mount(&server)
        .await;

    let queries = desk.queries();
    queries.tickets(&ListQuery::default()).await.unwrap();
    queries.tickets(&ListQuery::search("printer")).await.unwrap();

    server.verify().await;
}

// ── Mutation invalidation ───────────────────────────────────────────

#[tokio::test]
async fn create_tag_invalidates_tag_listings() {
    let (server, desk, _dir) = setup().await;

    // The listing is fetched once, invalidated by the create, then
    // fetched again: exactly two server hits.
    Mock::given(method("GET"))
        .and(path("/api/ticket-tags"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing(vec![tag_json("tag-1", "Billing", false)])),
        )
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/ticket-tags"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": tag_json("tag-2", "Test Ticket tag", false),
            "message": "created"
        })))
        .mount(&server)
        .await;

    let queries = desk.queries();
    let mutations = desk.mutations();

    queries.ticket_tags(&ListQuery::default()).await.unwrap();

    let created = mutations
        .create_ticket_tag(&CreateTicketTag {
            name: "Test Ticket tag".into(),
            color: None,
        })
        .await
        .unwrap();
    assert_eq!(created.name, "Test Ticket tag");

    let key = CacheKey::index(EntityKind::TicketTag, &ListQuery::default());
    assert!(desk.cache().is_stale(&key));

    queries.ticket_tags(&ListQuery::default()).await.unwrap();
    assert!(!desk.cache().is_stale(&key));

    server.verify().await;
}

#[tokio::test]
async fn archive_and_restore_refresh_both_active_and_archived_listings() {
    let (server, desk, _dir) = setup().await;

    // The active listing carries no is_archived flag; the archived one
    // sends is_archived=1. Scoped mocks swap the responses after each
    // mutation so the refetches must actually reach the server.
    let active_listing = Mock::given(method("GET"))
        .and(path("/api/ticket-tags"))
        .and(query_param_is_missing("is_archived"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing(vec![tag_json("tag-1", "Test Ticket tag", false)])),
        )
        .mount_as_scoped(&server)
        .await;
    let archived_listing = Mock::given(method("GET"))
        .and(path("/api/ticket-tags"))
        .and(query_param("is_archived", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![])))
        .mount_as_scoped(&server)
        .await;

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

    let queries = desk.queries();
    let mutations = desk.mutations();

    // Prime both listings: the tag starts out active.
    let before = queries.ticket_tags(&ListQuery::default()).await.unwrap();
    assert!(before.iter().any(|t| t.name == "Test Ticket tag"));
    assert!(queries.ticket_tags(&ListQuery::archived()).await.unwrap().is_empty());

    let active = CacheKey::index(EntityKind::TicketTag, &ListQuery::default());
    let archived = CacheKey::index(EntityKind::TicketTag, &ListQuery::archived());

    // Archiving moves the tag between listings: both go stale.
    mutations.archive_ticket_tag(&"tag-1".into()).await.unwrap();
    assert!(desk.cache().is_stale(&active));
    assert!(desk.cache().is_stale(&archived));

    // Server state after the archive: the tag only shows up archived.
    drop(active_listing);
    drop(archived_listing);
    let active_listing = Mock::given(method("GET"))
        .and(path("/api/ticket-tags"))
        .and(query_param_is_missing("is_archived"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![])))
        .mount_as_scoped(&server)
        .await;
    let archived_listing = Mock::given(method("GET"))
        .and(path("/api/ticket-tags"))
        .and(query_param("is_archived", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing(vec![tag_json("tag-1", "Test Ticket tag", true)])),
        )
        .mount_as_scoped(&server)
        .await;

    assert!(queries.ticket_tags(&ListQuery::default()).await.unwrap().is_empty());
    let gone = queries.ticket_tags(&ListQuery::archived()).await.unwrap();
    assert!(gone.iter().any(|t| t.name == "Test Ticket tag" && t.is_archived));
    assert!(!desk.cache().is_stale(&active));
    assert!(!desk.cache().is_stale(&archived));

    // Restore: both listings go stale again and refetch the new state.
    let restored = mutations.restore_ticket_tag(&"tag-1".into()).await.unwrap();
    assert_eq!(restored.name, "Test Ticket tag");
    assert!(desk.cache().is_stale(&active));
    assert!(desk.cache().is_stale(&archived));

    drop(active_listing);
    drop(archived_listing);
    Mock::given(method("GET"))
        .and(path("/api/ticket-tags"))
        .and(query_param_is_missing("is_archived"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing(vec![tag_json("tag-1", "Test Ticket tag", false)])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/ticket-tags"))
        .and(query_param("is_archived", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![])))
        .mount(&server)
        .await;

    let after = queries.ticket_tags(&ListQuery::default()).await.unwrap();
    assert!(after.iter().any(|t| t.name == "Test Ticket tag" && !t.is_archived));
    assert!(queries.ticket_tags(&ListQuery::archived()).await.unwrap().is_empty());
}

#[tokio::test]
async fn assign_ticket_invalidates_its_declared_scopes_only() {
    let (server, desk, _dir) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(listing(vec![ticket_json("t-1", "one")])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/tickets/t-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": ticket_json("t-1", "one"), "message": "ok" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/tickets/t-1/assignments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "id": "as-1",
                "ticket_id": "t-1",
                "admin_id": "a-9",
                "created_at": "2026-02-01T08:00:00Z"
            },
            "message": "assigned"
        })))
        .mount(&server)
        .await;

    let queries = desk.queries();
    queries.tickets(&ListQuery::default()).await.unwrap();
    queries.ticket(&"t-1".into()).await.unwrap();
    queries.users(&ListQuery::default()).await.unwrap();

    desk.mutations()
        .assign_ticket(&"t-1".into(), &"a-9".into())
        .await
        .unwrap();

    let cache = desk.cache();
    assert!(cache.is_stale(&CacheKey::index(EntityKind::Ticket, &ListQuery::default())));
    assert!(cache.is_stale(&CacheKey::show(EntityKind::Ticket, &"t-1".into())));
    // Undeclared scopes are untouched.
    assert!(!cache.is_stale(&CacheKey::index(EntityKind::User, &ListQuery::default())));
}

#[tokio::test]
async fn failed_mutation_leaves_the_cache_fresh() {
    let (server, desk, _dir) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/ticket-tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/ticket-tags"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "tag already exists" })),
        )
        .mount(&server)
        .await;

    let queries = desk.queries();
    queries.ticket_tags(&ListQuery::default()).await.unwrap();

    let result = desk
        .mutations()
        .create_ticket_tag(&CreateTicketTag {
            name: "Billing".into(),
            color: None,
        })
        .await;

    match result {
        Err(CoreError::MutationFailed { ref operation, ref source }) => {
            assert_eq!(operation, "create ticket tag");
            assert!(matches!(**source, CoreError::Conflict { .. }));
        }
        other => panic!("expected MutationFailed, got: {other:?}"),
    }

    // No invalidation happened; the listing is still served from cache.
    let key = CacheKey::index(EntityKind::TicketTag, &ListQuery::default());
    assert!(!desk.cache().is_stale(&key));
    queries.ticket_tags(&ListQuery::default()).await.unwrap();
    server.verify().await;
}

// ── Prefetch policy ─────────────────────────────────────────────────

#[tokio::test]
async fn prefetch_swallows_server_failures() {
    let (server, desk, _dir) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    desk.queries()
        .prefetch_tickets(&ListQuery::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn prefetch_rethrows_user_facing_failures() {
    let (server, desk, _dir) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "session expired" })),
        )
        .mount(&server)
        .await;

    let result = desk.queries().prefetch_tickets(&ListQuery::default()).await;
    assert!(
        matches!(result, Err(CoreError::SessionExpired { .. })),
        "got: {result:?}"
    );
}

#[tokio::test]
async fn prefetch_warms_listings_for_each_entity() {
    let (server, desk, _dir) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/channels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![json!({
            "id": "ch-1",
            "name": "Email",
            "is_archived": false,
            "created_at": "2026-02-01T08:00:00Z",
            "updated_at": "2026-02-01T08:00:00Z"
        })])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/ticket-tags"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing(vec![tag_json("tag-1", "Billing", false)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let queries = desk.queries();
    queries.prefetch_channels(&ListQuery::default()).await.unwrap();
    queries.prefetch_ticket_tags(&ListQuery::default()).await.unwrap();

    // Subsequent reads are served from the warmed cache.
    let channels = queries.channels(&ListQuery::default()).await.unwrap();
    assert_eq!(channels[0].name, "Email");
    let tags = queries.ticket_tags(&ListQuery::default()).await.unwrap();
    assert_eq!(tags[0].name, "Billing");

    server.verify().await;
}

// ── Session lifecycle ───────────────────────────────────────────────

#[tokio::test]
async fn login_persists_session_and_logout_clears_it() {
    let (server, desk, _dir) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "a-1",
                "name": "Dana",
                "email": "dana@example.com",
                "role": "super_admin",
                "is_active": true,
                "created_at": "2026-02-01T08:00:00Z",
                "updated_at": "2026-02-01T08:00:00Z"
            },
            "message": "ok"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": null, "message": "bye" })),
        )
        .mount(&server)
        .await;

    assert!(desk.require_authenticated().is_err());

    let secret: secrecy::SecretString = "hunter2".to_string().into();
    let admin = desk.login("dana@example.com", &secret).await.unwrap();
    assert_eq!(admin.email, "dana@example.com");

    assert!(desk.require_authenticated().is_ok());
    assert!(desk.require_super_admin().is_ok());

    desk.logout().await.unwrap();
    assert!(matches!(
        desk.require_authenticated(),
        Err(CoreError::AuthenticationRequired)
    ));
}
