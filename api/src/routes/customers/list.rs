use actix_web::{web, HttpResponse};

use cust_core::repositories::CustomerRepository;
use cust_core::services::hasher::PasswordHasherTrait;
use cust_core::services::storage::BlobStoreTrait;

use crate::dto::customer_dto::CustomerDto;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Handler for GET /api/v1/customers
pub async fn list<R, H, B>(state: web::Data<AppState<R, H, B>>) -> HttpResponse
where
    R: CustomerRepository + 'static,
    H: PasswordHasherTrait + 'static,
    B: BlobStoreTrait + 'static,
{
    match state.customer_service.list().await {
        Ok(views) => HttpResponse::Ok().json(
            views
                .into_iter()
                .map(CustomerDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}
