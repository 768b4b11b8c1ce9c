use actix_web::{web, HttpResponse};
use validator::Validate;

use cust_core::domain::entities::customer::CustomerPatch;
use cust_core::repositories::CustomerRepository;
use cust_core::services::hasher::PasswordHasherTrait;
use cust_core::services::storage::BlobStoreTrait;

use crate::dto::customer_dto::UpdateCustomerRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for PUT /api/v1/customers/{id}
///
/// Absent body fields leave the stored value untouched; a body that changes
/// nothing is rejected with 400.
pub async fn update<R, H, B>(
    state: web::Data<AppState<R, H, B>>,
    path: web::Path<i64>,
    request: web::Json<UpdateCustomerRequest>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
    H: PasswordHasherTrait + 'static,
    B: BlobStoreTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let patch = CustomerPatch::from(request.into_inner());
    match state.customer_service.update(path.into_inner(), patch).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(error) => handle_domain_error(error),
    }
}
