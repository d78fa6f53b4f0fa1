//! Registration, login, tokens and the admin gate

use bookshelf_core::{
    auth::require_role,
    config::AppConfig,
    models::{RegisterUser, Role},
    repository::memory::MemoryStore,
    AppError, AppState,
};
use chrono::Duration;
use std::sync::Arc;

use super::test_state;

fn register(email: &str, password: &str, name: &str) -> RegisterUser {
    RegisterUser {
        email: email.to_string(),
        password: password.to_string(),
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_register_authenticate_scenario() {
    let (state, _) = test_state();
    let users = &state.services.users;

    let alex = users
        .register_user(register("a@example.com", "secret", "Alex"))
        .await
        .expect("Registration should succeed");
    assert_eq!(alex.id, 1);
    assert_eq!(alex.role, Role::User);

    let again = users
        .register_user(register("a@example.com", "secret", "Alex"))
        .await;
    assert!(matches!(again, Err(AppError::AlreadyExists(_))));

    let authed = users
        .authenticate("a@example.com", "secret")
        .await
        .expect("Valid credentials should authenticate");
    assert_eq!(authed.id, 1);

    let wrong = users.authenticate("a@example.com", "wrong").await;
    assert!(matches!(wrong, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_unknown_email_and_wrong_password_look_the_same() {
    let (state, _) = test_state();
    let users = &state.services.users;
    users
        .register_user(register("a@example.com", "secret", "Alex"))
        .await
        .unwrap();

    let unknown = users.authenticate("nobody@example.com", "secret").await.unwrap_err();
    let wrong = users.authenticate("a@example.com", "hunter2").await.unwrap_err();

    assert_eq!(unknown.code(), wrong.code());
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn test_login_token_round_trip() {
    let (state, _) = test_state();
    let services = &state.services;
    services
        .users
        .register_user(register("a@example.com", "secret", "Alex"))
        .await
        .unwrap();

    let (token, user) = services.users.login("a@example.com", "secret").await.unwrap();
    let claims = services.tokens.verify(&token).unwrap();
    assert_eq!(claims.user_id, user.id);
    assert_eq!(claims.role, Role::User);

    let expired = services
        .tokens
        .issue(user.id, user.role, Duration::seconds(-1))
        .unwrap();
    assert!(matches!(
        services.tokens.verify(&expired),
        Err(AppError::InvalidToken(_))
    ));
}

#[tokio::test]
async fn test_role_change_is_gated_by_the_caller() {
    let (state, _) = test_state();
    let services = &state.services;
    let alex = services
        .users
        .register_user(register("a@example.com", "secret", "Alex"))
        .await
        .unwrap();
    let sam = services
        .users
        .register_user(register("s@example.com", "secret", "Sam"))
        .await
        .unwrap();

    // A regular user's token does not pass the admin gate
    let token = services.tokens.issue_default(alex.id, alex.role).unwrap();
    let claims = services.tokens.verify(&token).unwrap();
    assert!(matches!(claims.require_admin(), Err(AppError::Forbidden(_))));

    // The operation itself trusts its caller and succeeds without the gate
    services
        .users
        .update_user_role(sam.id, Role::Admin)
        .await
        .unwrap();
    let promoted = services.users.get_by_id(sam.id).await.unwrap();
    assert_eq!(promoted.role, Role::Admin);

    // New tokens carry the new role and pass the gate
    let (token, _) = services.users.login("s@example.com", "secret").await.unwrap();
    let claims = services.tokens.verify(&token).unwrap();
    assert!(claims.require_admin().is_ok());
    assert!(require_role(claims.role, Role::Admin).is_ok());
}

#[tokio::test]
async fn test_missing_secret_fails_startup() {
    let result = AppState::new(AppConfig::default(), Arc::new(MemoryStore::new()));
    assert!(matches!(result, Err(AppError::Config(_))));
}
