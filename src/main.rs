use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::{web, App, HttpServer};
use portal_auth::config::EnvConfig;
use portal_auth::db::mongo_service::MongoService;
use portal_auth::routes::configure_routes;
use portal_auth::utils::jwt::{JwtVerifier, TokenVerifier};
use std::path::Path;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let mongo_service = Arc::new(
        MongoService::new(&config.mongo)
            .await
            .expect("Failed to initialize MongoService"),
    );
    let token_verifier: Arc<dyn TokenVerifier> = Arc::new(JwtVerifier::new(&config.jwt));

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&config.cors_allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(Arc::clone(&mongo_service)))
            .app_data(web::Data::new(Arc::clone(&token_verifier)))
            .app_data(web::Data::new(config.clone()))
            .configure(configure_routes)
            .service(Files::new("/", &config.static_dir).index_file("index.html"))
            .default_service(web::get().to(spa_fallback))
    })
    .bind(addr)?
    .run()
    .await
}

// unmatched routes get index.html so the SPA router can take over
async fn spa_fallback(config: web::Data<EnvConfig>) -> actix_web::Result<NamedFile> {
    let index = Path::new(&config.static_dir).join("index.html");
    Ok(NamedFile::open(index)?)
}
