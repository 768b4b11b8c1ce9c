use actix_web::{web, HttpResponse};

use cust_core::repositories::CustomerRepository;
use cust_core::services::hasher::PasswordHasherTrait;
use cust_core::services::storage::BlobStoreTrait;

use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Handler for POST /api/v1/customers/{id}/profile-image
///
/// The raw request body is the image; the server assigns the blob key.
pub async fn upload<R, H, B>(
    state: web::Data<AppState<R, H, B>>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
    H: PasswordHasherTrait + 'static,
    B: BlobStoreTrait + 'static,
{
    match state
        .customer_service
        .upload_profile_image(path.into_inner(), &body)
        .await
    {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/customers/{id}/profile-image
pub async fn download<R, H, B>(
    state: web::Data<AppState<R, H, B>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
    H: PasswordHasherTrait + 'static,
    B: BlobStoreTrait + 'static,
{
    match state
        .customer_service
        .download_profile_image(path.into_inner())
        .await
    {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/octet-stream")
            .body(bytes),
        Err(error) => handle_domain_error(error),
    }
}
