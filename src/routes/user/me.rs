use crate::db::mongo_service::MongoService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserProfile;
use crate::utils::jwt::Claims;
use actix_web::{get, web, HttpMessage, HttpRequest};
use std::sync::Arc;

#[get("")]
pub async fn me(req: HttpRequest, db: web::Data<Arc<MongoService>>) -> ApiResult<UserProfile> {
    // attached by the bearer validator
    let claims = req
        .extensions()
        .get::<Claims>()
        .cloned()
        .ok_or(AppError::Unauthorized)?;

    let user = db
        .get_user_by_email(&claims.sub)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::Ok(user.into()))
}
