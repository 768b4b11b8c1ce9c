//! Mapping from the domain error taxonomy to HTTP responses.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use cust_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response
///
/// Every expected failure has a stable status and error code; the internal
/// channel deliberately leaks no detail to the caller.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::NotFound { .. } => HttpResponse::NotFound()
            .json(ErrorResponse::new("not_found", error.to_string())),
        DomainError::DuplicateEmail => HttpResponse::Conflict()
            .json(ErrorResponse::new("duplicate_email", error.to_string())),
        DomainError::NoChanges => HttpResponse::BadRequest()
            .json(ErrorResponse::new("no_changes", error.to_string())),
        DomainError::InvalidCredentials => HttpResponse::Unauthorized()
            .json(ErrorResponse::new("invalid_credentials", error.to_string())),
        DomainError::InvalidToken => HttpResponse::Unauthorized()
            .json(ErrorResponse::new("invalid_token", error.to_string())),
        DomainError::NoProfileImage { .. } => HttpResponse::NotFound()
            .json(ErrorResponse::new("no_profile_image", error.to_string())),
        DomainError::Storage { .. } => {
            tracing::error!("storage failure: {error}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("storage_error", "storage operation failed"))
        }
        DomainError::Internal { .. } => {
            tracing::error!("internal error: {error}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("internal_error", "an internal error occurred"))
        }
    }
}

/// Convert request validation failures into a 400 response
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut details = std::collections::HashMap::new();
    details.insert(
        "validation_errors".to_string(),
        serde_json::json!(errors),
    );

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", "invalid request data").with_details(details),
    )
}
