//! Integration tests for the internship catalog and posting flow.

use std::time::Duration;

use chrono::Utc;
use internhub::{ErrorKind, InternshipDraft, InternshipFilter, RegistrationOutcome, Role};
use internhub_core::traits::storage::KeyValueStoreExt;
use internhub_core::types::InternshipId;
use internhub_entity::internship::RecentInternship;

use crate::helpers::{DEMO_SECRET, TestApp};

fn draft() -> InternshipDraft {
    InternshipDraft {
        title: "Platform PM Intern".to_string(),
        company: "CloudSolutions".to_string(),
        description: "Own the developer portal roadmap.".to_string(),
        requirements: vec!["API literacy".to_string()],
        ..InternshipDraft::default()
    }
}

#[test]
fn test_catalog_search() {
    let app = TestApp::new();

    assert_eq!(app.portal.internships(&InternshipFilter::default()).len(), 6);

    let filter = InternshipFilter {
        duration: Some("6 months".to_string()),
        ..InternshipFilter::default()
    };
    let titles: Vec<String> = app
        .portal
        .internships(&filter)
        .into_iter()
        .map(|i| i.title)
        .collect();
    assert_eq!(titles, ["Associate Product Manager", "Junior Product Manager"]);
}

#[tokio::test(start_paused = true)]
async fn test_only_students_apply() {
    let app = TestApp::new();
    let id = InternshipId::new("3");

    let err = app.portal.apply_internship(&id).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);

    assert!(app.portal.login("student@test.com", DEMO_SECRET, Role::Student).await);
    assert_eq!(app.portal.apply_internship(&id).unwrap().company, "BigTech Inc");
    assert_eq!(
        app.portal.apply_internship(&InternshipId::new("7")).unwrap_err().kind,
        ErrorKind::NotFound
    );
}

#[tokio::test(start_paused = true)]
async fn test_mentor_posts_and_dashboard_shows_recent() {
    let app = TestApp::new();
    assert!(app.portal.login("mentor@test.com", DEMO_SECRET, Role::Mentor).await);

    let started = tokio::time::Instant::now();
    let recent = app.portal.post_internship(draft()).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1500));

    assert_eq!(app.portal.recent_internship().unwrap(), Some(recent));
    let raw: serde_json::Value =
        serde_json::from_str(&app.raw("recentInternship").unwrap()).unwrap();
    assert_eq!(raw["title"], "Platform PM Intern");
    assert!(raw["timestamp"].is_i64());

    app.portal.dismiss_recent_internship().unwrap();
    assert_eq!(app.portal.recent_internship().unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_students_and_anonymous_cannot_post() {
    let app = TestApp::new();

    let err = app.portal.post_internship(draft()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);

    assert!(app.portal.login("student@test.com", DEMO_SECRET, Role::Student).await);
    let err = app.portal.post_internship(draft()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
    assert!(app.raw("recentInternship").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_blank_requirements_rejected() {
    let app = TestApp::new();
    assert!(app.portal.login("admin@test.com", DEMO_SECRET, Role::Admin).await);

    let invalid = InternshipDraft {
        requirements: vec!["   ".to_string()],
        ..draft()
    };
    let err = app.portal.post_internship(invalid).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(app.raw("recentInternship").is_none());
}

#[test]
fn test_stale_recent_internship_is_purged() {
    let app = TestApp::new();
    let stale = RecentInternship::new(
        "Old Posting",
        "TechCorp",
        Utc::now() - chrono::Duration::hours(25),
    );
    app.storage.set_json("recentInternship", &stale).unwrap();

    assert_eq!(app.portal.recent_internship().unwrap(), None);
    assert!(app.raw("recentInternship").is_none());
}

#[test]
fn test_registration_outcome_wire_shape() {
    let ok = RegistrationOutcome {
        ok: true,
        reason: None,
    };
    assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"ok":true}"#);

    let failed = RegistrationOutcome {
        ok: false,
        reason: Some("User with this email already exists".to_string()),
    };
    let value = serde_json::to_value(&failed).unwrap();
    assert_eq!(value["reason"], "User with this email already exists");
}
