use crate::db::mongo_service::MongoService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserLogin, UserProfile};
use crate::utils::password::verify_password;
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
pub async fn login(
    db: web::Data<Arc<MongoService>>,
    body: web::Json<RUserLogin>,
) -> ApiResult<UserProfile> {
    let body = body.into_inner();

    // same response for unknown email and bad password
    let user = match db.get_user_by_email(&body.email).await? {
        Some(u) => u,
        None => return Err(AppError::Unauthorized),
    };

    // a hash bcrypt cannot parse is a server-side problem, not a bad password
    let password = body.password;
    let stored_hash = user.password_hash.clone();
    let is_valid = web::block(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    if !is_valid {
        return Err(AppError::Unauthorized);
    }

    Ok(ApiResponse::Ok(user.into()))
}
