use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let bearer_auth = HttpAuthentication::bearer(validate_token);

    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/health")
                    .service(health::health)
                    .wrap(bearer_auth.clone()),
            )
            .service(
                web::scope("/user")
                    .service(web::scope("/register").service(user::register::register))
                    .service(web::scope("/login").service(user::login::login))
                    .service(
                        web::scope("/me")
                            .service(user::me::me)
                            .wrap(bearer_auth),
                    ),
            ),
    );
}
