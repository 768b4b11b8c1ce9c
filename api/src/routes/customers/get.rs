use actix_web::{web, HttpResponse};

use cust_core::repositories::CustomerRepository;
use cust_core::services::hasher::PasswordHasherTrait;
use cust_core::services::storage::BlobStoreTrait;

use crate::dto::customer_dto::CustomerDto;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Handler for GET /api/v1/customers/{id}
pub async fn get<R, H, B>(
    state: web::Data<AppState<R, H, B>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
    H: PasswordHasherTrait + 'static,
    B: BlobStoreTrait + 'static,
{
    match state.customer_service.get(path.into_inner()).await {
        Ok(view) => HttpResponse::Ok().json(CustomerDto::from(view)),
        Err(error) => handle_domain_error(error),
    }
}
