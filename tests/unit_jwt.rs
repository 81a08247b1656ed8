use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use mindspace_api::config::jwt::JwtConfig;
use mindspace_api::modules::users::model::UserRole;
use mindspace_api::utils::errors::AppError;
use mindspace_api::utils::jwt::{
    Claims, JWT_AUDIENCE, JWT_ISSUER, create_access_token, create_refresh_token,
    verify_access_token, verify_refresh_token,
};

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        access_secret: "test-access-secret".to_string(),
        refresh_secret: "test-refresh-secret".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 604_800,
    }
}

fn raw_claims(token_type: Option<&str>, exp_offset: i64) -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        user_id: Uuid::new_v4().to_string(),
        user_name: "alice".to_string(),
        email: "alice@test.com".to_string(),
        role: UserRole::User,
        token_type: token_type.map(|t| t.to_string()),
        iss: JWT_ISSUER.to_string(),
        aud: JWT_AUDIENCE.to_string(),
        exp: (now + exp_offset) as usize,
        iat: now as usize,
    }
}

#[test]
fn test_access_token_round_trip() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, "alice", "alice@test.com", UserRole::Mentor, &jwt_config)
        .unwrap();
    let claims = verify_access_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.user_id, user_id.to_string());
    assert_eq!(claims.user_name, "alice");
    assert_eq!(claims.email, "alice@test.com");
    assert_eq!(claims.role, UserRole::Mentor);
    assert_eq!(claims.token_type, None);
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.aud, JWT_AUDIENCE);
}

#[test]
fn test_refresh_token_round_trip() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_refresh_token(user_id, "alice", "alice@test.com", UserRole::User, &jwt_config)
        .unwrap();
    let claims = verify_refresh_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.user_id, user_id.to_string());
    assert_eq!(claims.token_type.as_deref(), Some("refresh"));
}

#[test]
fn test_refresh_token_rejected_as_access_token() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let refresh =
        create_refresh_token(user_id, "alice", "alice@test.com", UserRole::User, &jwt_config)
            .unwrap();

    let result = verify_access_token(&refresh, &jwt_config);
    assert!(matches!(result, Err(AppError::TokenInvalid)));
}

#[test]
fn test_access_token_rejected_as_refresh_token() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let access =
        create_access_token(user_id, "alice", "alice@test.com", UserRole::User, &jwt_config)
            .unwrap();

    let result = verify_refresh_token(&access, &jwt_config);
    assert!(matches!(result, Err(AppError::TokenInvalid)));
}

#[test]
fn test_refresh_secret_without_type_claim_is_invalid() {
    // Correct refresh secret but no `type` discriminator: must still fail.
    let jwt_config = get_test_jwt_config();
    let claims = raw_claims(None, 3600);

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.refresh_secret.as_bytes()),
    )
    .unwrap();

    let result = verify_refresh_token(&token, &jwt_config);
    assert!(matches!(result, Err(AppError::TokenInvalid)));
}

#[test]
fn test_expired_access_token() {
    let jwt_config = get_test_jwt_config();
    let claims = raw_claims(None, -1000);

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.access_secret.as_bytes()),
    )
    .unwrap();

    let result = verify_access_token(&token, &jwt_config);
    assert!(matches!(result, Err(AppError::TokenExpired)));
}

#[test]
fn test_expired_refresh_token() {
    let jwt_config = get_test_jwt_config();
    let claims = raw_claims(Some("refresh"), -1000);

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.refresh_secret.as_bytes()),
    )
    .unwrap();

    let result = verify_refresh_token(&token, &jwt_config);
    assert!(matches!(result, Err(AppError::TokenExpired)));
}

#[test]
fn test_wrong_issuer_is_invalid() {
    let jwt_config = get_test_jwt_config();
    let mut claims = raw_claims(None, 3600);
    claims.iss = "SomeoneElse".to_string();

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.access_secret.as_bytes()),
    )
    .unwrap();

    let result = verify_access_token(&token, &jwt_config);
    assert!(matches!(result, Err(AppError::TokenInvalid)));
}

#[test]
fn test_wrong_audience_is_invalid() {
    let jwt_config = get_test_jwt_config();
    let mut claims = raw_claims(None, 3600);
    claims.aud = "SomeoneElse-Users".to_string();

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.access_secret.as_bytes()),
    )
    .unwrap();

    let result = verify_access_token(&token, &jwt_config);
    assert!(matches!(result, Err(AppError::TokenInvalid)));
}

#[test]
fn test_malformed_tokens_are_invalid() {
    let jwt_config = get_test_jwt_config();

    for token in ["", "not-a-jwt", "a.b", "a.b.c.d", "!!!.???.###"] {
        let result = verify_access_token(token, &jwt_config);
        assert!(matches!(result, Err(AppError::TokenInvalid)), "token: {token:?}");
    }
}
