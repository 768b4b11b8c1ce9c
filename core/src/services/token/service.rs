//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::errors::DomainError;

use super::config::TokenServiceConfig;

/// Service minting and verifying signed stateless tokens
///
/// There is no revocation list; invalidation is purely time-based.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;
        // No clock leeway: expiry is exact.
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed token for a subject with the given roles
    ///
    /// Expiry is the configured duration after issuance.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - the encoded token
    /// * `Err(DomainError)` - signing failed
    pub fn issue(&self, subject: &str, roles: Vec<String>) -> Result<String, DomainError> {
        let claims = Claims::new(
            subject,
            roles,
            Duration::minutes(self.config.token_expiry_minutes),
        );
        let header = Header::new(self.config.algorithm);
        encode(&header, &claims, &self.encoding_key).map_err(|e| DomainError::Internal {
            message: format!("failed to sign token: {e}"),
        })
    }

    /// Decodes and validates a token, returning its claims
    ///
    /// Any failure (bad signature, malformed token, expired) collapses to
    /// [`DomainError::InvalidToken`]; the distinction never reaches callers.
    pub fn decode(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::InvalidToken)
    }

    /// Checks that a token is valid and was issued for the expected subject
    ///
    /// Fails closed: signature mismatch, malformed input, expiry, and subject
    /// mismatch all yield `false`, never an error.
    pub fn verify(&self, token: &str, expected_subject: &str) -> bool {
        match self.decode(token) {
            Ok(claims) => claims.sub == expected_subject,
            Err(_) => false,
        }
    }
}
