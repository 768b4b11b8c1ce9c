//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::value_objects::{CustomerView, LoginResponse};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CustomerRepository;
use crate::services::hasher::PasswordHasherTrait;
use crate::services::token::TokenService;

/// Authentication service verifying credentials and minting tokens
pub struct AuthService<R, H>
where
    R: CustomerRepository,
    H: PasswordHasherTrait,
{
    /// Customer repository for identity lookup
    repository: Arc<R>,
    /// One-way credential hasher
    hasher: Arc<H>,
    /// Stateless token issuer
    token_service: Arc<TokenService>,
}

impl<R, H> AuthService<R, H>
where
    R: CustomerRepository,
    H: PasswordHasherTrait,
{
    /// Create a new authentication service
    pub fn new(repository: Arc<R>, hasher: Arc<H>, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            hasher,
            token_service,
        }
    }

    /// Verifies a credential and issues a token on success
    ///
    /// Unknown identity and wrong credential both collapse to
    /// [`DomainError::InvalidCredentials`] so callers cannot probe which
    /// emails are registered.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResponse> {
        let customer = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        if !self.hasher.verify(password, &customer.password_hash)? {
            tracing::debug!("credential verification failed");
            return Err(DomainError::InvalidCredentials);
        }

        let view = CustomerView::from(&customer);
        let token = self.token_service.issue(email, view.roles.clone())?;

        tracing::info!(customer_id = view.id, "customer logged in");
        Ok(LoginResponse::new(token, view))
    }
}
