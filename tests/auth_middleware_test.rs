use actix_web::{http::StatusCode, test, web, App};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use portal_auth::config::JwtSettings;
use portal_auth::routes::configure_routes;
use portal_auth::utils::jwt::{Claims, JwtVerifier, TokenVerifier};
use std::sync::Arc;

const KEY: &str = "0123456789abcdef0123456789abcdef";
const ISSUER: &str = "portal-auth";
const AUDIENCE: &str = "portal-spa";

fn verifier() -> web::Data<Arc<dyn TokenVerifier>> {
    let settings = JwtSettings::new(
        KEY.to_string(),
        ISSUER.to_string(),
        AUDIENCE.to_string(),
    )
    .expect("test settings");
    let verifier: Arc<dyn TokenVerifier> = Arc::new(JwtVerifier::new(&settings));
    web::Data::new(verifier)
}

fn mint(key: &str, issuer: &str, audience: &str, lifetime: Duration) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: "a@b.com".to_string(),
        iss: issuer.to_string(),
        aud: audience.to_string(),
        iat: now.timestamp(),
        exp: (now + lifetime).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(key.as_bytes()),
    )
    .expect("token encoding")
}

#[tokio::test]
async fn request_without_token_is_rejected() {
    let app = test::init_service(
        App::new().app_data(verifier()).configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = test::init_service(
        App::new().app_data(verifier()).configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("Authorization", "Bearer not.a.jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_issuer_is_rejected() {
    let app = test::init_service(
        App::new().app_data(verifier()).configure(configure_routes),
    )
    .await;

    let token = mint(KEY, "someone-else", AUDIENCE, Duration::hours(1));
    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_audience_is_rejected() {
    let app = test::init_service(
        App::new().app_data(verifier()).configure(configure_routes),
    )
    .await;

    let token = mint(KEY, ISSUER, "another-app", Duration::hours(1));
    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_signing_key_is_rejected() {
    let app = test::init_service(
        App::new().app_data(verifier()).configure(configure_routes),
    )
    .await;

    let token = mint(
        "ffffffffffffffffffffffffffffffff",
        ISSUER,
        AUDIENCE,
        Duration::hours(1),
    );
    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let app = test::init_service(
        App::new().app_data(verifier()).configure(configure_routes),
    )
    .await;

    let token = mint(KEY, ISSUER, AUDIENCE, Duration::hours(-2));
    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_reaches_the_handler() {
    let app = test::init_service(
        App::new().app_data(verifier()).configure(configure_routes),
    )
    .await;

    let token = mint(KEY, ISSUER, AUDIENCE, Duration::hours(1));
    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
