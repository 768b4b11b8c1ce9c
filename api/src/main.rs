use std::sync::Arc;

use actix_web::web;
use dotenvy::dotenv;
use jsonwebtoken::Algorithm;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cust_api::app::create_app;
use cust_api::config::Config;
use cust_api::routes::AppState;
use cust_api::seed::seed_demo_customer;

use cust_core::services::auth::AuthService;
use cust_core::services::customer::CustomerService;
use cust_core::services::token::{TokenService, TokenServiceConfig};

use cust_infra::database::connection::create_pool;
use cust_infra::database::mysql::MySqlCustomerRepository;
use cust_infra::security::BcryptPasswordHasher;
use cust_infra::storage::FileSystemBlobStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize the subscriber; the log bridge also surfaces records from
    // actix's own Logger middleware.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Customer Platform API Server");

    let config = Config::from_env();
    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    // Wire up infrastructure
    let pool = create_pool(&config.database).await?;
    let repository = Arc::new(MySqlCustomerRepository::new(pool));
    let hasher = Arc::new(BcryptPasswordHasher::new());
    let blob_store = Arc::new(FileSystemBlobStore::new(config.storage.root.clone()));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: config.auth.jwt_secret.clone(),
        algorithm: Algorithm::HS256,
        token_expiry_minutes: config.auth.token_expiry_minutes,
    }));

    // Wire up domain services
    let customer_service = Arc::new(CustomerService::new(
        Arc::clone(&repository),
        Arc::clone(&hasher),
        blob_store,
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&repository),
        Arc::clone(&hasher),
        Arc::clone(&token_service),
    ));

    if std::env::var("SEED_DEMO_DATA").is_ok() {
        seed_demo_customer(customer_service.as_ref()).await;
    }

    let app_state = web::Data::new(AppState {
        customer_service,
        auth_service,
        token_service,
    });
    let jwt_secret = config.auth.jwt_secret.clone();

    info!("Server will bind to: {}", bind_address);

    actix_web::HttpServer::new(move || create_app(app_state.clone(), jwt_secret.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
