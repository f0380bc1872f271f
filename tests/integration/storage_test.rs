//! Integration tests for session persistence across reloads.

use std::sync::Arc;

use internhub::{GateDecision, Role};
use internhub_core::traits::storage::KeyValueStore;
use internhub_storage::providers::MemoryStore;

use crate::helpers::{DEMO_SECRET, TestApp};

#[tokio::test(start_paused = true)]
async fn test_session_survives_reload_of_same_profile() {
    let profile = Arc::new(MemoryStore::new());

    let first = TestApp::with_storage(profile.clone());
    assert!(first.portal.login("mentor@test.com", DEMO_SECRET, Role::Mentor).await);
    drop(first);

    let reloaded = TestApp::with_storage(profile);
    let session = reloaded.portal.current_session().unwrap();
    assert_eq!(session.email, "mentor@test.com");
    assert_eq!(session.display_name, "Jane Smith");
    assert_eq!(reloaded.portal.authorize(&[Role::Mentor]), GateDecision::Allow);
}

#[tokio::test(start_paused = true)]
async fn test_session_survives_reopening_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile").join("local_storage.json");

    let first = TestApp::with_file(&path);
    assert!(first.portal.login("admin@test.com", DEMO_SECRET, Role::Admin).await);
    drop(first);

    let reopened = TestApp::with_file(&path);
    assert_eq!(reopened.portal.current_session().unwrap().role, Role::Admin);

    reopened.portal.logout().unwrap();
    let again = TestApp::with_file(&path);
    assert!(again.portal.current_session().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_registered_account_is_forgotten_on_reload() {
    let profile = Arc::new(MemoryStore::new());

    let first = TestApp::with_storage(profile.clone());
    let outcome = first
        .portal
        .register("Ana Ruiz", "ana@test.com", "long-secret", Role::Student)
        .await;
    assert!(outcome.ok);
    drop(first);

    // The session persists, the directory does not.
    let reloaded = TestApp::with_storage(profile);
    assert_eq!(reloaded.portal.current_session().unwrap().email, "ana@test.com");
    assert!(!reloaded.portal.login("ana@test.com", "long-secret", Role::Student).await);
    assert!(reloaded.portal.login("student@test.com", DEMO_SECRET, Role::Student).await);
}

#[test]
fn test_corrupt_session_reads_as_signed_out() {
    let app = TestApp::new();
    app.storage.set("pm_portal_user", "not json").unwrap();

    assert!(app.portal.current_session().is_none());
    assert!(!app.portal.authorize(&[Role::Student]).is_allowed());
}
