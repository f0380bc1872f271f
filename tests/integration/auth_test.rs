//! Integration tests for login, registration, and logout.

use internhub::{AuthFailure, AuthState, Role};

use crate::helpers::{DEMO_SECRET, TestApp};

#[tokio::test(start_paused = true)]
async fn test_every_seeded_role_can_log_in() {
    let app = TestApp::new();

    for (email, role) in [
        ("student@test.com", Role::Student),
        ("mentor@test.com", Role::Mentor),
        ("admin@test.com", Role::Admin),
    ] {
        assert!(app.portal.login(email, DEMO_SECRET, role).await);
        let session = app.portal.current_session().unwrap();
        assert_eq!(session.role, role);
        assert_eq!(session.email, email);
    }
}

#[tokio::test(start_paused = true)]
async fn test_role_slots_are_independent() {
    let app = TestApp::new();

    assert!(!app.portal.login("student@test.com", DEMO_SECRET, Role::Mentor).await);
    assert!(app.portal.current_session().is_none());
    assert!(app.raw_session().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_failed_login_keeps_previous_session() {
    let app = TestApp::new();
    assert!(app.portal.login("admin@test.com", DEMO_SECRET, Role::Admin).await);

    assert!(!app.portal.login("admin@test.com", "wrong-secret", Role::Admin).await);
    assert_eq!(app.portal.current_session().unwrap().role, Role::Admin);
}

#[tokio::test(start_paused = true)]
async fn test_weak_secret_mutates_nothing() {
    let app = TestApp::new();

    let outcome = app
        .portal
        .register("Sam Lee", "sam@test.com", "12345", Role::Student)
        .await;

    assert!(!outcome.ok);
    assert!(outcome.reason.unwrap().contains("at least 6"));
    assert!(app.raw_session().is_none());
    assert!(!app.portal.auth().directory().exists("sam@test.com"));
    assert_eq!(
        app.portal.auth().directory().find(Role::Student).unwrap().email,
        "student@test.com"
    );
}

#[tokio::test(start_paused = true)]
async fn test_duplicate_email_in_any_slot() {
    let app = TestApp::new();

    let result = app
        .portal
        .auth()
        .register("Copycat", "admin@test.com", "longenough", Role::Student)
        .await;

    assert!(matches!(result, Err(AuthFailure::DuplicateEmail)));
    assert!(app.portal.current_session().is_none());

    let outcome = app
        .portal
        .register("Copycat", "mentor@test.com", "longenough", Role::Admin)
        .await;
    assert_eq!(outcome.reason.as_deref(), Some("User with this email already exists"));
}

#[tokio::test(start_paused = true)]
async fn test_registration_replaces_slot_and_signs_in() {
    let app = TestApp::new();

    let outcome = app
        .portal
        .register("Riya Patel", "riya@test.com", "s3cure-enough", Role::Mentor)
        .await;
    assert!(outcome.ok);
    assert_eq!(outcome.reason, None);

    let session = app.portal.current_session().unwrap();
    assert_eq!(session.email, "riya@test.com");
    assert_eq!(session.display_name, "Riya Patel");
    assert_eq!(session.role, Role::Mentor);

    // The demo mentor was evicted from its slot.
    assert!(!app.portal.login("mentor@test.com", DEMO_SECRET, Role::Mentor).await);
    assert!(app.portal.login("riya@test.com", "s3cure-enough", Role::Mentor).await);
}

#[tokio::test(start_paused = true)]
async fn test_attempt_state_settles() {
    let app = TestApp::new();
    assert!(matches!(app.portal.auth().state(), AuthState::Idle));

    app.portal.login("nobody@test.com", DEMO_SECRET, Role::Student).await;
    assert!(matches!(
        app.portal.auth().state(),
        AuthState::Rejected(AuthFailure::InvalidCredentials)
    ));

    app.portal.login("student@test.com", DEMO_SECRET, Role::Student).await;
    assert!(matches!(app.portal.auth().state(), AuthState::Resolved(_)));
}

#[tokio::test(start_paused = true)]
async fn test_logout_is_idempotent() {
    let app = TestApp::new();
    assert!(app.portal.login("mentor@test.com", DEMO_SECRET, Role::Mentor).await);

    app.portal.logout().unwrap();
    app.portal.logout().unwrap();

    assert!(app.portal.current_session().is_none());
    assert!(app.raw_session().is_none());
    assert!(matches!(app.portal.auth().state(), AuthState::Idle));
}
