// tests/auth_flow_test.rs
// Account flows against an in-memory sqlite database.

mod common;

use reco_backend::auth::jwt::verify_token;
use reco_backend::auth::models::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use reco_backend::auth::{AuthError, AuthService};

use common::{test_auth_config, test_pool};

fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        username: "hanako".to_string(),
        email: email.to_string(),
        password: "s3cret-password".to_string(),
        mbti_type: Some("INFP".to_string()),
        city: Some("Osaka".to_string()),
    }
}

#[tokio::test]
async fn register_then_login_yields_matching_claims_snapshot() {
    let pool = test_pool().await;
    let service = AuthService::new(pool, test_auth_config());

    let user = service
        .register(register_request("Hanako@Example.com"))
        .await
        .unwrap();
    // email is stored normalized
    assert_eq!(user.email, "hanako@example.com");

    let response = service
        .login(LoginRequest {
            email: "HANAKO@example.com".to_string(),
            password: "s3cret-password".to_string(),
        })
        .await
        .unwrap();

    let claims = verify_token("test-secret", &response.token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.username, "hanako");
    assert_eq!(claims.email, "hanako@example.com");
    assert_eq!(claims.city.as_deref(), Some("Osaka"));
    assert_eq!(claims.mbti_type.as_deref(), Some("INFP"));
}

#[tokio::test]
async fn duplicate_email_is_rejected_without_creating_a_second_account() {
    let pool = test_pool().await;
    let service = AuthService::new(pool.clone(), test_auth_config());

    service
        .register(register_request("hanako@example.com"))
        .await
        .unwrap();

    let err = service
        .register(register_request("HANAKO@EXAMPLE.COM"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::DuplicateEmail));

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[tokio::test]
async fn login_failure_does_not_reveal_which_field_was_wrong() {
    let pool = test_pool().await;
    let service = AuthService::new(pool, test_auth_config());

    service
        .register(register_request("hanako@example.com"))
        .await
        .unwrap();

    let wrong_password = service
        .login(LoginRequest {
            email: "hanako@example.com".to_string(),
            password: "nope".to_string(),
        })
        .await
        .unwrap_err();

    let unknown_email = service
        .login(LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "s3cret-password".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert!(matches!(unknown_email, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let pool = test_pool().await;
    let service = AuthService::new(pool, test_auth_config());

    let err = service
        .register(RegisterRequest {
            username: "  ".to_string(),
            email: "a@example.com".to_string(),
            password: "pw".to_string(),
            mbti_type: None,
            city: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::MissingFields(_)));
}

#[tokio::test]
async fn profile_update_replaces_only_supplied_fields() {
    let pool = test_pool().await;
    let service = AuthService::new(pool, test_auth_config());

    let user = service
        .register(register_request("hanako@example.com"))
        .await
        .unwrap();

    let updated = service
        .update_profile(
            &user.id,
            UpdateProfileRequest {
                username: None,
                mbti_type: Some("ENTJ".to_string()),
                city: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.username, "hanako");
    assert_eq!(updated.mbti_type.as_deref(), Some("ENTJ"));
    assert_eq!(updated.city.as_deref(), Some("Osaka"));
}
