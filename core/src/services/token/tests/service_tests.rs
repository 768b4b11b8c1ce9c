//! Tests for stateless token issuance and verification

use crate::domain::value_objects::DEFAULT_ROLE;
use crate::errors::DomainError;
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..Default::default()
    })
}

fn roles() -> Vec<String> {
    vec![DEFAULT_ROLE.to_string()]
}

#[test]
fn test_verify_accepts_freshly_issued_token() {
    let service = service();
    let token = service.issue("alex@example.com", roles()).unwrap();

    assert!(service.verify(&token, "alex@example.com"));
}

#[test]
fn test_decode_returns_subject_and_roles() {
    let service = service();
    let token = service.issue("alex@example.com", roles()).unwrap();

    let claims = service.decode(&token).unwrap();
    assert_eq!(claims.sub, "alex@example.com");
    assert_eq!(claims.roles, roles());
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_verify_rejects_subject_mismatch() {
    let service = service();
    let token = service.issue("alex@example.com", roles()).unwrap();

    assert!(!service.verify(&token, "other@example.com"));
}

#[test]
fn test_verify_rejects_expired_token() {
    let service = TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        token_expiry_minutes: -5,
        ..Default::default()
    });
    let token = service.issue("alex@example.com", roles()).unwrap();

    assert!(!service.verify(&token, "alex@example.com"));
}

#[test]
fn test_verify_rejects_malformed_token() {
    let service = service();

    assert!(!service.verify("not-a-jwt", "alex@example.com"));
    assert!(!service.verify("", "alex@example.com"));
}

#[test]
fn test_verify_rejects_token_signed_with_other_secret() {
    let issuing = TokenService::new(TokenServiceConfig {
        jwt_secret: "other-secret".to_string(),
        ..Default::default()
    });
    let verifying = service();

    let token = issuing.issue("alex@example.com", roles()).unwrap();
    assert!(!verifying.verify(&token, "alex@example.com"));
}

#[test]
fn test_decode_collapses_failures_to_invalid_token() {
    let service = service();

    let err = service.decode("garbage").unwrap_err();
    assert!(matches!(err, DomainError::InvalidToken));
}
