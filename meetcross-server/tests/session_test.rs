//! Session manager integration tests

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use meetcross_server::auth::{AuthError, JwtConfig, JwtService, SessionManager, SessionState};
use meetcross_server::db::repository::account;
use shared::models::UserRole;

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    pool
}

fn test_jwt() -> Arc<JwtService> {
    Arc::new(JwtService::with_config(JwtConfig {
        secret: "0123456789abcdef0123456789abcdef".into(),
        expiration_minutes: 60,
        issuer: "meetcross-server".into(),
        audience: "meetcross-clients".into(),
    }))
}

async fn test_sessions() -> (SessionManager, SqlitePool, Arc<JwtService>) {
    let pool = test_pool().await;
    let jwt = test_jwt();
    let sessions = SessionManager::new(pool.clone(), jwt.clone());
    (sessions, pool, jwt)
}

#[tokio::test]
async fn test_no_token_resolves_anonymous() {
    let (sessions, _pool, _jwt) = test_sessions().await;
    assert_eq!(sessions.current_user(None).await, SessionState::Anonymous);
}

#[tokio::test]
async fn test_garbage_token_resolves_anonymous() {
    let (sessions, _pool, _jwt) = test_sessions().await;
    assert_eq!(
        sessions.current_user(Some("not-a-jwt")).await,
        SessionState::Anonymous
    );
}

#[tokio::test]
async fn test_register_login_resolve_roundtrip() {
    let (sessions, _pool, _jwt) = test_sessions().await;

    let profile = sessions
        .register("ada@example.com", "correct horse", "Ada Lovelace")
        .await
        .expect("register");
    assert_eq!(profile.name, "Ada Lovelace");
    // First registrant is promoted to Admin
    assert_eq!(profile.role, UserRole::Admin);

    let token = sessions
        .login("ada@example.com", "correct horse")
        .await
        .expect("login");

    let state = sessions.current_user(Some(&token)).await;
    let resolved = state.profile().expect("authenticated");
    assert_eq!(resolved.name, "Ada Lovelace");
    assert_eq!(resolved.email, "ada@example.com");
    assert_eq!(resolved.role, UserRole::Admin);
}

#[tokio::test]
async fn test_second_registrant_gets_staff() {
    let (sessions, _pool, _jwt) = test_sessions().await;

    sessions
        .register("ada@example.com", "correct horse", "Ada")
        .await
        .expect("first registration");
    let second = sessions
        .register("grace@example.com", "battery staple", "Grace")
        .await
        .expect("second registration");
    assert_eq!(second.role, UserRole::Staff);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let (sessions, _pool, _jwt) = test_sessions().await;

    sessions
        .register("ada@example.com", "correct horse", "Ada")
        .await
        .expect("first registration");
    let err = sessions
        .register("ada@example.com", "other password", "Imposter")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken(_)));
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_look_alike() {
    let (sessions, _pool, _jwt) = test_sessions().await;

    sessions
        .register("ada@example.com", "correct horse", "Ada")
        .await
        .expect("register");

    let err = sessions
        .login("ada@example.com", "wrong password")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));

    let err = sessions
        .login("nobody@example.com", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_account_without_profile_gets_placeholder() {
    let (sessions, pool, jwt) = test_sessions().await;

    // Account provisioned without its profile row
    let acct = account::create(&pool, "grace.hopper@example.com", "$argon2$fake")
        .await
        .expect("create account");
    let token = jwt
        .generate_token(&acct.id, &acct.email)
        .expect("mint token");

    let state = sessions.current_user(Some(&token)).await;
    let profile = state.profile().expect("authenticated via placeholder");
    assert_eq!(profile.id, acct.id);
    assert_eq!(profile.name, "grace.hopper");
    assert_eq!(profile.role, UserRole::Staff);
    assert!(profile.avatar.is_some());
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let (sessions, _pool, _jwt) = test_sessions().await;

    sessions
        .register("ada@example.com", "correct horse", "Ada")
        .await
        .expect("register");
    let token = sessions
        .login("ada@example.com", "correct horse")
        .await
        .expect("login");
    assert!(matches!(
        sessions.current_user(Some(&token)).await,
        SessionState::Authenticated(_)
    ));

    sessions.logout();
    sessions.logout();
    let mut rx = sessions.subscribe();
    assert_eq!(*rx.borrow_and_update(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_register_signs_in_and_notifies_subscribers() {
    let (sessions, _pool, _jwt) = test_sessions().await;
    let mut rx = sessions.subscribe();

    sessions
        .register("ada@example.com", "correct horse", "Ada")
        .await
        .expect("register");

    match rx.borrow_and_update().clone() {
        SessionState::Authenticated(profile) => {
            assert_eq!(profile.name, "Ada");
            assert_eq!(profile.role, UserRole::Admin);
        }
        other => panic!("expected authenticated state after registration, got {other:?}"),
    }
}

#[tokio::test]
async fn test_subscribers_observe_transitions() {
    let (sessions, _pool, _jwt) = test_sessions().await;
    let mut rx = sessions.subscribe();

    // Channel starts unresolved until the first resolution lands
    assert_eq!(*rx.borrow_and_update(), SessionState::Unresolved);

    sessions.current_user(None).await;
    assert_eq!(*rx.borrow_and_update(), SessionState::Anonymous);

    sessions
        .register("ada@example.com", "correct horse", "Ada")
        .await
        .expect("register");
    sessions
        .login("ada@example.com", "correct horse")
        .await
        .expect("login");
    match rx.borrow_and_update().clone() {
        SessionState::Authenticated(profile) => assert_eq!(profile.name, "Ada"),
        other => panic!("expected authenticated state, got {other:?}"),
    }

    sessions.logout();
    assert_eq!(*rx.borrow_and_update(), SessionState::Anonymous);
}
