use crate::config::MongoSettings;
use crate::types::user::AppUser;
use log::info;
use mongodb::{bson::doc, options::IndexOptions, Client, Collection, IndexModel};

#[derive(Clone)]
pub struct MongoService {
    pub(crate) users: Collection<AppUser>,
}

impl MongoService {
    pub async fn new(settings: &MongoSettings) -> mongodb::error::Result<Self> {
        info!("Connecting to MongoDB...");
        let client = Client::with_uri_str(&settings.connection_string).await?;
        let database = client.database(&settings.database_name);
        let service = Self {
            users: database.collection("Users"),
        };
        service.ensure_indexes().await?;
        info!("Connected to MongoDB.");
        Ok(service)
    }

    /// Email is the identity key; a unique index closes the window between
    /// the existence check and the insert when two creates race.
    async fn ensure_indexes(&self) -> mongodb::error::Result<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.users.create_index(email_index, None).await?;
        Ok(())
    }
}
