use crate::db::mongo_service::MongoService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{AppUser, RUserRegister, UserCreateRes};
use crate::utils::password::hash_password;
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
pub async fn register(
    db: web::Data<Arc<MongoService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<UserCreateRes> {
    let body = body.into_inner();
    if body.email.is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest(
            "email and password are required".to_string(),
        ));
    }

    // bcrypt is CPU-bound, keep it off the async workers
    let password = body.password;
    let password_hash = web::block(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let user_id = db
        .create_user(AppUser {
            id: None,
            email: body.email,
            name: body.name,
            password_hash,
        })
        .await?;

    Ok(ApiResponse::Created(UserCreateRes {
        id: user_id.to_hex(),
    }))
}
