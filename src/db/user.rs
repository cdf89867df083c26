use crate::db::mongo_service::MongoService;
use crate::types::{error::AppError, user::AppUser};
use mongodb::bson::{doc, oid::ObjectId};

impl MongoService {
    /// Exact-equality match on the stored email; first hit or `None`.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<AppUser>, AppError> {
        Ok(self.users.find_one(doc! { "email": email }, None).await?)
    }

    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(self
            .users
            .count_documents(doc! { "email": email }, None)
            .await?
            > 0)
    }

    /// Signup: create user. Duplicates are caught twice, by the check here
    /// and by the unique index if a concurrent create slips past it.
    pub async fn create_user(&self, user: AppUser) -> Result<ObjectId, AppError> {
        if self.user_exists_by_email(&user.email).await? {
            return Err(AppError::AlreadyExists);
        }

        let inserted = self.users.insert_one(user, None).await?;
        inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("inserted _id was not an ObjectId".to_string()))
    }
}
