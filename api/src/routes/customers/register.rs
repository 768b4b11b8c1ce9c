use actix_web::{http::header, web, HttpResponse};
use validator::Validate;

use cust_core::domain::value_objects::DEFAULT_ROLE;
use cust_core::repositories::CustomerRepository;
use cust_core::services::hasher::PasswordHasherTrait;
use cust_core::services::storage::BlobStoreTrait;

use crate::dto::customer_dto::RegisterCustomerRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /api/v1/customers
///
/// Registers a new customer and returns the assigned id. A freshly minted
/// token rides back in the Authorization header so the client can call
/// protected endpoints without a separate login round trip.
pub async fn register<R, H, B>(
    state: web::Data<AppState<R, H, B>>,
    request: web::Json<RegisterCustomerRequest>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
    H: PasswordHasherTrait + 'static,
    B: BlobStoreTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let request = request.into_inner();
    let email = request.email.clone();

    let id = match state
        .customer_service
        .register(
            request.name,
            request.email,
            &request.password,
            request.age,
            request.gender,
        )
        .await
    {
        Ok(id) => id,
        Err(error) => return handle_domain_error(error),
    };

    match state
        .token_service
        .issue(&email, vec![DEFAULT_ROLE.to_string()])
    {
        Ok(token) => HttpResponse::Created()
            .insert_header((header::AUTHORIZATION, token))
            .json(serde_json::json!({ "id": id })),
        Err(error) => handle_domain_error(error),
    }
}
