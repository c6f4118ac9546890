//! Data service facade integration tests
//!
//! Exercises the facade operation set over the in-memory store.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use event_portal::database::backends::MemoryStore;
use event_portal::database::RecordStore;
use event_portal::models::UpdateUserRequest;
use event_portal::PortalError;
use helpers::*;

#[tokio::test]
async fn test_create_user_then_lookup_by_email() {
    let ctx = TestContext::memory();
    let request = create_user_request();

    let created = ctx.data().create_user(request.clone()).await.unwrap();
    let found = ctx.data().get_user_by_email(&request.email).await.unwrap().unwrap();

    assert_eq!(found, created);
    assert!(!found.id.is_empty());
    assert_eq!(found.first_name, request.first_name);
    assert_eq!(found.last_name, request.last_name);
    assert_eq!(found.email, request.email);
    assert_eq!(found.password, request.password);
    assert_eq!(found.phone, request.phone);
    assert_eq!(found.organization, request.organization);
    assert_eq!(found.membership_type, request.membership_type);
    assert_eq!(found.is_ieee_member, request.is_ieee_member);
    assert!(found.updated_at.is_none());
}

#[tokio::test]
async fn test_email_lookup_is_exact() {
    let ctx = TestContext::memory();
    ctx.data()
        .create_user(create_user_request_with_email("Mixed.Case@example.org"))
        .await
        .unwrap();

    assert!(ctx.data().get_user_by_email("mixed.case@example.org").await.unwrap().is_none());
    assert!(ctx.data().get_user_by_email("Mixed.Case@example.org").await.unwrap().is_some());
}

#[tokio::test]
async fn test_concurrent_initialize_seeds_once() {
    let counting = Arc::new(
        CountingStore::new(Arc::new(MemoryStore::new())).with_read_delay(Duration::from_millis(20)),
    );
    let data = data_service(counting.clone());

    let first = data.clone();
    let second = data.clone();
    let (a, b) = tokio::join!(
        tokio::spawn(async move { first.initialize().await }),
        tokio::spawn(async move { second.initialize().await }),
    );
    a.unwrap().unwrap();
    b.unwrap().unwrap();

    assert_eq!(counting.writes("events"), 1);
    assert_eq!(counting.reads("events"), 1);
    assert_eq!(data.get_events().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_concurrent_first_calls_of_any_kind_seed_once() {
    let counting = Arc::new(
        CountingStore::new(Arc::new(MemoryStore::new())).with_read_delay(Duration::from_millis(10)),
    );
    let data = data_service(counting.clone());

    let (events, user, registrations) = tokio::join!(
        data.get_events(),
        data.get_user_by_email("someone@example.org"),
        data.get_registrations_by_user_id("u1"),
    );

    assert_eq!(events.unwrap().len(), 3);
    assert!(user.unwrap().is_none());
    assert!(registrations.unwrap().is_empty());
    assert_eq!(counting.writes("events"), 1);
}

#[tokio::test]
async fn test_separate_facades_do_not_reseed() {
    let ctx = TestContext::memory();
    ctx.data().initialize().await.unwrap();

    let other = ctx.reopen();
    other.initialize().await.unwrap();

    assert_eq!(other.get_events().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_ticket_numbers_match_pattern() {
    let ctx = TestContext::memory();
    let pattern = regex::Regex::new(r"^IEEE-\d{4}$").unwrap();

    for _ in 0..25 {
        let registration = ctx
            .data()
            .create_registration(registration_request("u1", "1"))
            .await
            .unwrap();
        assert!(pattern.is_match(&registration.ticket_number), "{}", registration.ticket_number);
        assert!(registration.qr_code.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=IEEE-TICKET-"));
    }
}

#[tokio::test]
async fn test_ticket_is_not_regenerated_on_read() {
    let ctx = TestContext::memory();
    let created = ctx
        .data()
        .create_registration(registration_request("u1", "3"))
        .await
        .unwrap();

    let read_back = ctx.data().get_registration_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(read_back.ticket_number, created.ticket_number);
    assert_eq!(read_back.qr_code, created.qr_code);
    assert_eq!(read_back.registration_date, created.registration_date);
}

#[tokio::test]
async fn test_seeded_event_lookup() {
    let ctx = TestContext::memory();
    let event = ctx.data().get_event_by_id("1").await.unwrap().unwrap();

    assert!(!event.title.is_empty());
    assert!(!event.date.is_empty());
    assert!(!event.location.is_empty());
    assert!(ctx.data().get_event_by_id("does-not-exist").await.unwrap().is_none());
}

#[tokio::test]
async fn test_registrations_by_user_are_exact() {
    let ctx = TestContext::memory();
    let mut mine = Vec::new();
    for event_id in ["1", "2", "3"] {
        mine.push(ctx.data().create_registration(registration_request("me", event_id)).await.unwrap().id);
        ctx.data().create_registration(registration_request("you", event_id)).await.unwrap();
    }

    let found: Vec<String> = ctx
        .data()
        .get_registrations_by_user_id("me")
        .await
        .unwrap()
        .into_iter()
        .map(|registration| {
            assert_eq!(registration.user_id, "me");
            registration.id
        })
        .collect();

    assert_eq!(found, mine);
    assert!(ctx.data().get_registrations_by_user_id("nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_missing_user_changes_nothing() {
    let ctx = TestContext::memory();
    ctx.data().create_user(create_user_request()).await.unwrap();
    let before = ctx.store.read_collection("users").await.unwrap();

    let result = ctx
        .data()
        .update_user("no-such-id", UpdateUserRequest {
            first_name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(result.is_none());
    assert_eq!(ctx.store.read_collection("users").await.unwrap(), before);
}

#[tokio::test]
async fn test_update_user_merges_and_stamps() {
    let ctx = TestContext::memory();
    let user = ctx.data().create_user(create_user_request()).await.unwrap();

    let updated = ctx
        .data()
        .update_user(&user.id, UpdateUserRequest {
            ieee_number: Some(Some("94123456".to_string())),
            is_ieee_member: Some(true),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.created_at, user.created_at);
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.ieee_number.as_deref(), Some("94123456"));
    assert!(updated.updated_at.is_some());
    assert_eq!(ctx.data().get_user_by_id(&user.id).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn test_update_user_can_clear_optional_fields() {
    let ctx = TestContext::memory();
    let user = ctx.data().create_user(create_user_request()).await.unwrap();
    assert!(user.phone.is_some());

    let updated = ctx
        .data()
        .update_user(&user.id, UpdateUserRequest {
            phone: Some(None),
            organization: Some(None),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.phone, None);
    assert_eq!(updated.organization, None);
    let stored = ctx.store.read_collection("users").await.unwrap();
    assert!(stored[0].get("phone").is_none());
    assert!(stored[0].get("organization").is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_are_all_stored() {
    let ctx = TestContext::memory();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let data = ctx.data().clone();
            tokio::spawn(async move { data.create_user(create_user_request()).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(ctx.store.read_collection("users").await.unwrap().len(), 20);
}

#[tokio::test]
async fn test_unavailable_storage_fails_initialization() {
    let data = data_service(Arc::new(UnavailableStore));

    assert_matches!(data.initialize().await, Err(PortalError::Initialization(_)));
    assert!(!data.is_initialized());
    assert_matches!(data.get_events().await, Err(PortalError::Initialization(_)));
    assert!(data.connect_to_storage().await.is_err());
}
