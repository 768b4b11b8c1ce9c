use actix_web::{web, HttpResponse};

use cust_core::repositories::CustomerRepository;
use cust_core::services::hasher::PasswordHasherTrait;
use cust_core::services::storage::BlobStoreTrait;

use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Handler for DELETE /api/v1/customers/{id}
pub async fn delete<R, H, B>(
    state: web::Data<AppState<R, H, B>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
    H: PasswordHasherTrait + 'static,
    B: BlobStoreTrait + 'static,
{
    match state.customer_service.delete(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(error) => handle_domain_error(error),
    }
}
