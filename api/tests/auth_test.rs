//! End-to-end tests for authentication and the JWT middleware

mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test;

use common::{register_body, test_state, TEST_JWT_SECRET};
use cust_api::app::create_app;

async fn register<S, B>(app: &S, email: &str)
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(register_body("Alex", email))
        .to_request();
    assert_eq!(
        test::call_service(app, req).await.status(),
        StatusCode::CREATED
    );
}

fn login_body(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password })
}

#[actix_web::test]
async fn test_login_returns_token_and_customer_view() {
    let app = test::init_service(create_app(test_state(), TEST_JWT_SECRET.to_string())).await;
    register(&app, "alex@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(login_body("alex@example.com", "password"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["customer"]["email"], "alex@example.com");
    assert_eq!(body["customer"]["roles"], serde_json::json!(["ROLE_USER"]));
}

#[actix_web::test]
async fn test_login_token_opens_protected_routes() {
    let app = test::init_service(create_app(test_state(), TEST_JWT_SECRET.to_string())).await;
    register(&app, "alex@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(login_body("alex@example.com", "password"))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/v1/customers")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::OK
    );
}

#[actix_web::test]
async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let app = test::init_service(create_app(test_state(), TEST_JWT_SECRET.to_string())).await;
    register(&app, "alex@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(login_body("alex@example.com", "wrong-password"))
        .to_request();
    let wrong_password = test::call_service(&app, req).await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: serde_json::Value = test::read_body_json(wrong_password).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(login_body("nobody@example.com", "password"))
        .to_request();
    let unknown_email = test::call_service(&app, req).await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email: serde_json::Value = test::read_body_json(unknown_email).await;

    assert_eq!(wrong_password["error"], unknown_email["error"]);
    assert_eq!(wrong_password["message"], unknown_email["message"]);
}

#[actix_web::test]
async fn test_protected_route_rejects_missing_and_malformed_tokens() {
    let app = test::init_service(create_app(test_state(), TEST_JWT_SECRET.to_string())).await;

    let req = test::TestRequest::get().uri("/api/v1/customers").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/customers")
        .insert_header((header::AUTHORIZATION, "Bearer not.a.token"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/customers")
        .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = test::init_service(create_app(test_state(), TEST_JWT_SECRET.to_string())).await;
    register(&app, "alex@example.com").await;

    // Sign a structurally valid token under a different secret.
    let other = cust_core::services::token::TokenService::new(
        cust_core::services::token::TokenServiceConfig {
            jwt_secret: "some-other-secret".to_string(),
            ..Default::default()
        },
    );
    let forged = other
        .issue("alex@example.com", vec!["ROLE_USER".to_string()])
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v1/customers")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", forged)))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    let app = test::init_service(create_app(test_state(), TEST_JWT_SECRET.to_string())).await;
    register(&app, "alex@example.com").await;

    // Same secret, but the token was already expired at issuance.
    let expired_issuer = cust_core::services::token::TokenService::new(
        cust_core::services::token::TokenServiceConfig {
            jwt_secret: TEST_JWT_SECRET.to_string(),
            token_expiry_minutes: -5,
            ..Default::default()
        },
    );
    let expired = expired_issuer
        .issue("alex@example.com", vec!["ROLE_USER".to_string()])
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v1/customers")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", expired)))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_login_rejects_malformed_username() {
    let app = test::init_service(create_app(test_state(), TEST_JWT_SECRET.to_string())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(login_body("not-an-email", "password"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}
