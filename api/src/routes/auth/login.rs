use actix_web::{web, HttpResponse};
use validator::Validate;

use cust_core::repositories::CustomerRepository;
use cust_core::services::hasher::PasswordHasherTrait;
use cust_core::services::storage::BlobStoreTrait;

use crate::dto::auth_dto::{LoginRequest, LoginResponseDto};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Verifies the submitted credential and returns a bearer token plus the
/// customer view. Unknown email and wrong password produce the same 401.
pub async fn login<R, H, B>(
    state: web::Data<AppState<R, H, B>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
    H: PasswordHasherTrait + 'static,
    B: BlobStoreTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(LoginResponseDto::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
