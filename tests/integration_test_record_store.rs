mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use common::{parse_body, router_for_store, SlowRepo, TestApp};
use serde_json::json;
use tower::ServiceExt;
use wedding_invitation::{
    config::ReadFailurePolicy,
    domain::models::{rsvp::{RsvpEntry, RsvpStatus}, wish::WishPatch},
    domain::services::{
        guest_name::{resolve_guest_name, NameSource},
        record_store::{RecordStore, StorePolicy},
    },
    error::AppError,
};

fn slow_store(read_failure: ReadFailurePolicy) -> RecordStore {
    let repo = Arc::new(SlowRepo { delay: Duration::from_millis(500) });
    RecordStore::new(
        repo.clone(),
        repo.clone(),
        repo,
        StorePolicy { timeout: Duration::from_millis(50), read_failure },
    )
}

#[tokio::test]
async fn test_rapid_inserts_get_unique_descending_ids() {
    let app = TestApp::new().await;
    let store = &app.state.store;

    for i in 0..20 {
        store.add_wish(format!("Tamu {}", i), "Selamat!".to_string()).await.unwrap();
    }

    let wishes = store.list_wishes().await.unwrap();
    assert_eq!(wishes.len(), 20);
    for pair in wishes.windows(2) {
        assert!(pair[0].id > pair[1].id, "ids must be unique and listed newest first");
    }
    assert_eq!(wishes[0].name, "Tamu 19");
}

#[tokio::test]
async fn test_concurrent_inserts_get_unique_ids() {
    let app = TestApp::new().await;
    let store = &app.state.store;

    let (a, b, c, d) = tokio::join!(
        store.add_wish("Tamu A".into(), "Selamat".into()),
        store.add_wish("Tamu B".into(), "Selamat".into()),
        store.add_wish("Tamu C".into(), "Selamat".into()),
        store.add_wish("Tamu D".into(), "Selamat".into()),
    );
    let mut ids = vec![a.unwrap().id, b.unwrap().id, c.unwrap().id, d.unwrap().id];
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);

    let (first, second) = tokio::join!(
        app.json("POST", "/api/rsvp", None, json!({"name": "Siti", "status": "attending", "guests": 2})),
        app.json("POST", "/api/rsvp", None, json!({"name": "Budi", "status": "attending", "guests": 1})),
    );
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    let first_id = parse_body(first).await["id"].as_i64().unwrap();
    let second_id = parse_body(second).await["id"].as_i64().unwrap();
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn test_update_touches_only_target_record() {
    let app = TestApp::new().await;
    let store = &app.state.store;

    let a = store.add_rsvp(RsvpEntry::new("Andi".into(), RsvpStatus::Attending, 3)).await.unwrap();
    let b = store.add_rsvp(RsvpEntry::new("Bela".into(), RsvpStatus::Attending, 1)).await.unwrap();

    let wish = store.add_wish("Andi".into(), "Lama".into()).await.unwrap();
    store.update_wish(wish.id, WishPatch { name: None, message: Some("Baru".into()) }).await.unwrap();
    store.update_wish(wish.id, WishPatch::default()).await.unwrap();

    store.delete_rsvp(a.id).await.unwrap();
    store.delete_rsvp(a.id).await.unwrap();

    let rsvps = store.list_rsvp().await.unwrap();
    assert_eq!(rsvps.len(), 1);
    assert_eq!(rsvps[0].id, b.id);
    assert_eq!(rsvps[0].guests, 1);

    let wishes = store.list_wishes().await.unwrap();
    assert_eq!(wishes[0].message, "Baru");
    assert_eq!(wishes[0].name, "Andi");
}

#[tokio::test]
async fn test_slow_reads_fail_open() {
    let store = slow_store(ReadFailurePolicy::Open);

    assert!(store.list_wishes().await.unwrap().is_empty());
    assert!(store.list_rsvp().await.unwrap().is_empty());
    assert!(store.list_invitations().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_slow_reads_fail_closed() {
    let store = slow_store(ReadFailurePolicy::Closed);

    let err = store.list_wishes().await.unwrap_err();
    assert!(matches!(err, AppError::Timeout(_)));
}

#[tokio::test]
async fn test_slow_writes_always_propagate() {
    let store = slow_store(ReadFailurePolicy::Open);

    let err = store.add_wish("Tamu".into(), "Halo".into()).await.unwrap_err();
    assert!(matches!(err, AppError::Timeout(_)));
    let err = store.delete_rsvp(1).await.unwrap_err();
    assert!(matches!(err, AppError::Timeout(_)));

    let router = router_for_store(slow_store(ReadFailurePolicy::Open));
    let res = router
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/wishes")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(json!({"name": "Tamu", "message": "Halo"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::GATEWAY_TIMEOUT);
    assert!(parse_body(res).await["error"].is_string());
}

#[tokio::test]
async fn test_resolver_falls_back_on_timeout() {
    let store = slow_store(ReadFailurePolicy::Closed);

    let guest = resolve_guest_name(&store, Some("budi-santoso")).await;
    assert_eq!(guest.guest_name, "budi-santoso");
    assert_eq!(guest.source, NameSource::Literal);
}
