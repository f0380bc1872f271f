//! Integration tests for role gating and navigation.

use internhub::{GateDecision, Navigation, RedirectTarget, Role};

use crate::helpers::{DEMO_SECRET, TestApp};

#[tokio::test(start_paused = true)]
async fn test_seeded_student_example() {
    let app = TestApp::new();
    assert!(app.portal.login("student@test.com", DEMO_SECRET, Role::Student).await);

    assert_eq!(app.portal.authorize(&[Role::Student]), GateDecision::Allow);
    assert_eq!(
        app.portal.authorize(&[Role::Mentor]),
        GateDecision::Redirect(RedirectTarget::RoleHome(Role::Student))
    );
}

#[tokio::test(start_paused = true)]
async fn test_logout_then_authorize_redirects_to_login() {
    let app = TestApp::new();
    assert!(app.portal.login("student@test.com", DEMO_SECRET, Role::Student).await);
    app.portal.logout().unwrap();

    let decision = app.portal.authorize(&[Role::Student]);
    assert!(!decision.is_allowed());
    assert_eq!(decision.redirect_path().as_deref(), Some("/login/student"));
}

#[tokio::test(start_paused = true)]
async fn test_admin_denied_mentor_area_goes_to_admin_home() {
    let app = TestApp::new();
    assert!(app.portal.login("admin@test.com", DEMO_SECRET, Role::Admin).await);

    let decision = app.portal.authorize(&[Role::Mentor]);
    assert_eq!(decision.redirect_path().as_deref(), Some("/admin/dashboard"));
}

#[tokio::test(start_paused = true)]
async fn test_navigation_follows_session() {
    let app = TestApp::new();

    assert_eq!(app.portal.navigate("/"), Navigation::Allow);
    assert_eq!(
        app.portal.navigate("/admin/post-internship"),
        Navigation::Redirect(RedirectTarget::Login {
            role: Role::Admin
        })
    );

    assert!(app.portal.login("mentor@test.com", DEMO_SECRET, Role::Mentor).await);

    assert_eq!(app.portal.navigate("/mentor/post-internship"), Navigation::Allow);
    assert_eq!(
        app.portal.navigate("/"),
        Navigation::Redirect(RedirectTarget::RoleHome(Role::Mentor))
    );
    assert_eq!(
        app.portal.navigate("/student/internships"),
        Navigation::Redirect(RedirectTarget::RoleHome(Role::Mentor))
    );
    assert_eq!(app.portal.navigate("/settings"), Navigation::NotFound);
    assert_eq!(app.portal.navigate("/login"), Navigation::NotFound);
}
