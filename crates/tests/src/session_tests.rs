use crate::common;
use portal::{Route, Session};
use pretty_assertions::assert_eq;
use shared_types::{LoginRequest, UserRole};
use std::time::Duration;

fn login(email: &str, password: &str, role: UserRole) -> LoginRequest {
    LoginRequest {
        email: email.into(),
        password: password.into(),
        role: Some(role),
    }
}

#[tokio::test]
async fn test_supervisor_login_routes_to_supervisor_dashboard() {
    common::init();
    let mut session = Session::with_delay(Duration::ZERO);
    let route = session
        .login(login("supervisor@plant.example", "secret1", UserRole::Supervisor))
        .await
        .unwrap();
    assert_eq!(route, Route::Supervisor);
    assert_eq!(route.path(), "/supervisor");
    assert!(session.is_authenticated());
    assert_eq!(session.user().unwrap().role, UserRole::Supervisor);
}

#[tokio::test]
async fn test_short_password_is_rejected() {
    let mut session = Session::with_delay(Duration::ZERO);
    let err = session
        .login(login("engineer@plant.example", "12345", UserRole::Engineer))
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.field_error("password"),
        Some("Password must be at least 6 characters")
    );
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_invalid_email_and_missing_role() {
    let mut session = Session::with_delay(Duration::ZERO);
    let request = LoginRequest {
        email: "not-an-email".into(),
        password: "longenough".into(),
        role: None,
    };
    let err = session.login(request).await.unwrap_err();
    assert!(err.field_error("email").is_some());
    assert_eq!(err.field_error("role"), Some("Please select a role"));
}

#[tokio::test]
async fn test_login_waits_for_the_configured_delay() {
    let mut session = Session::with_delay(Duration::from_millis(20));
    let started = tokio::time::Instant::now();
    session
        .login(login("qa@plant.example", "compliance", UserRole::Compliance))
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(20));
}

#[tokio::test]
async fn test_logout_hides_dashboard_links() {
    let mut session = Session::with_delay(Duration::ZERO);
    assert_eq!(session.nav_links().len(), 1);

    session
        .login(login("eng@plant.example", "password", UserRole::Engineer))
        .await
        .unwrap();
    let labels: Vec<&str> = session.nav_links().iter().map(|l| l.label).collect();
    assert_eq!(
        labels,
        vec![
            "Home",
            "Engineer Dashboard",
            "Supervisor Dashboard",
            "Compliance Dashboard"
        ]
    );

    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.nav_links().len(), 1);
}

#[test]
fn test_unknown_paths_resolve_to_not_found() {
    common::init();
    assert_eq!(Route::from_path("/admin"), Route::NotFound);
    assert_eq!(Route::from_path("/compliance/"), Route::Compliance);
    assert_eq!(Route::from_path("/"), Route::Home);
}

#[test]
fn test_dashboards_are_reachable_without_login() {
    let session = Session::with_delay(Duration::ZERO);
    assert!(!session.is_authenticated());
    assert_eq!(Route::from_path("/engineer"), Route::Engineer);
}
