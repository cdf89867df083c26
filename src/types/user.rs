use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One registered principal, as stored in the `Users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

#[derive(Serialize, Deserialize)]
pub struct RUserRegister {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RUserLogin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserCreateRes {
    pub id: String,
}

/// What the API exposes about a user. The hash never leaves the server.
#[derive(Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
}

impl From<AppUser> for UserProfile {
    fn from(user: AppUser) -> Self {
        UserProfile {
            email: user.email,
            name: user.name,
        }
    }
}
