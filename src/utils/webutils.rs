use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::utils::jwt::TokenVerifier;

pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let verifier = match req.app_data::<web::Data<Arc<dyn TokenVerifier>>>() {
        Some(v) => v.clone(),
        None => return Err((ErrorUnauthorized("Token verifier not configured"), req)),
    };

    match verifier.verify(credentials.token()) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(_) => Err((ErrorUnauthorized("Invalid token"), req)),
    }
}
