use super::MessageStore;
use crate::config::MongoConfig;
use crate::error::StoreError;
use crate::models::message::StatusMessage;
use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::options::{ClientOptions, Credential};
use mongodb::{Client, Collection};
use std::time::Duration;
use tracing::debug;

pub const COLLECTION_NAME: &str = "messages";

/// Upper bound on server selection and on the whole startup handshake.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the Atlas SRV connection string. Credentials are attached to the
/// client options separately so they never appear in the URI.
pub fn connection_uri(config: &MongoConfig) -> String {
    format!(
        "mongodb+srv://{host}/{db}?appName={db}&retryWrites=true&w=majority",
        host = config.host,
        db = config.db_name,
    )
}

/// Sort order that puts the newest record first.
pub fn latest_first() -> Document {
    doc! { "timestamp": -1 }
}

#[derive(Clone)]
pub struct MongoMessageStore {
    collection: Collection<StatusMessage>,
}

impl MongoMessageStore {
    pub fn from_collection(collection: Collection<StatusMessage>) -> Self {
        Self { collection }
    }

    /// Resolves the cluster, authenticates and pings the database, giving up
    /// after `timeout`.
    pub async fn connect(config: &MongoConfig, timeout: Duration) -> Result<Self, StoreError> {
        tokio::time::timeout(timeout, Self::handshake(config, timeout))
            .await
            .map_err(|_| StoreError::Timeout(timeout))?
    }

    async fn handshake(config: &MongoConfig, timeout: Duration) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(connection_uri(config)).await?;
        options.credential = Some(
            Credential::builder()
                .username(config.user.clone())
                .password(config.password.clone())
                .build(),
        );
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        let database = client.database(&config.db_name);
        database.run_command(doc! { "ping": 1 }).await?;
        debug!(db = %config.db_name, "ping acknowledged");

        Ok(Self::from_collection(database.collection(COLLECTION_NAME)))
    }
}

#[async_trait]
impl MessageStore for MongoMessageStore {
    async fn find_latest(&self) -> Result<Option<StatusMessage>, StoreError> {
        let latest = self
            .collection
            .find_one(doc! {})
            .sort(latest_first())
            .await?;
        Ok(latest)
    }

    async fn create(&self, mut message: StatusMessage) -> Result<StatusMessage, StoreError> {
        let result = self.collection.insert_one(&message).await?;
        message.id = result.inserted_id.as_object_id();
        Ok(message)
    }
}
