//! Application factory
//!
//! Builds the Actix-web application with all routes, middleware, and shared
//! state. Kept separate from `main` so integration tests can construct the
//! same app against mock-backed state.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::login::login;
use crate::routes::customers::{
    delete::delete, get::get, list::list, profile_image, register::register, update::update,
};
use crate::routes::AppState;

use cust_core::repositories::CustomerRepository;
use cust_core::services::hasher::PasswordHasherTrait;
use cust_core::services::storage::BlobStoreTrait;

/// Create and configure the application with all dependencies
///
/// Registration and login are the only public endpoints besides the health
/// check; everything else is wrapped with JWT authentication per route.
pub fn create_app<R, H, B>(
    app_state: web::Data<AppState<R, H, B>>,
    jwt_secret: String,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: CustomerRepository + 'static,
    H: PasswordHasherTrait + 'static,
    B: BlobStoreTrait + 'static,
{
    let cors = create_cors();
    let guard = move || JwtAuth::with_secret(jwt_secret.clone());

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/customers")
                        .route("", web::post().to(register::<R, H, B>))
                        .route("", web::get().to(list::<R, H, B>).wrap(guard()))
                        .route("/{id}", web::get().to(get::<R, H, B>).wrap(guard()))
                        .route("/{id}", web::put().to(update::<R, H, B>).wrap(guard()))
                        .route("/{id}", web::delete().to(delete::<R, H, B>).wrap(guard()))
                        .route(
                            "/{id}/profile-image",
                            web::post()
                                .to(profile_image::upload::<R, H, B>)
                                .wrap(guard()),
                        )
                        .route(
                            "/{id}/profile-image",
                            web::get()
                                .to(profile_image::download::<R, H, B>)
                                .wrap(guard()),
                        ),
                )
                .service(
                    web::scope("/auth").route("/login", web::post().to(login::<R, H, B>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "customer-platform-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
