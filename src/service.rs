use crate::config::{ConfigError, MongoConfig};
use crate::error::{StatusError, StoreError};
use crate::models::message::StatusMessage;
use crate::store::{MessageStore, MongoMessageStore, mongo::CONNECT_TIMEOUT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use utoipa::ToSchema;

pub const DEFAULT_MESSAGE_TEXT: &str = "Welcome! This message was retrieved from MongoDB Atlas.";

/// Lifetime state of the document store connection.
///
/// `Unconfigured` is final when credentials are missing. A single attempt
/// moves the service to `Established` or `Failed`; nothing moves it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Unconfigured,
    Established,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusResult {
    pub message: String,
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

/// # Status Service
///
/// Answers "what is the current status message?" from the newest record in
/// the store, seeding a default record the first time the collection is
/// found empty.
pub struct StatusService {
    state: ConnectionState,
    store: Option<Arc<dyn MessageStore>>,
    source: String,
}

impl StatusService {
    pub fn new(
        state: ConnectionState,
        store: Option<Arc<dyn MessageStore>>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            state,
            store,
            source: source.into(),
        }
    }

    pub fn established(store: Arc<dyn MessageStore>, source: impl Into<String>) -> Self {
        Self::new(ConnectionState::Established, Some(store), source)
    }

    pub fn unconfigured() -> Self {
        Self::new(ConnectionState::Unconfigured, None, String::new())
    }

    /// Makes the one connection attempt of the process lifetime.
    ///
    /// Never fails: missing configuration or an unreachable cluster is
    /// logged and leaves the service answering "service unavailable".
    pub async fn bootstrap(config: Result<MongoConfig, ConfigError>) -> Self {
        let config = match config {
            Ok(config) => config,
            Err(e) => {
                error!(error = %e, "FATAL ERROR: Required MongoDB environment variables are missing.");
                error!("Skipping DB connection: MongoDB credentials not set.");
                return Self::unconfigured();
            }
        };

        info!(host = %config.host, "Attempting to connect to MongoDB Atlas host");
        match MongoMessageStore::connect(&config, CONNECT_TIMEOUT).await {
            Ok(store) => {
                info!("Successfully connected to MongoDB Atlas.");
                Self::established(Arc::new(store), config.source_label())
            }
            Err(e) => {
                error!(error = %e, "ERROR: Failed to connect to MongoDB Atlas.");
                Self::new(ConnectionState::Failed, None, config.source_label())
            }
        }
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.state
    }

    pub async fn get_latest_status(&self) -> Result<StatusResult, StatusError> {
        let store = match (&self.state, &self.store) {
            (ConnectionState::Established, Some(store)) => store,
            _ => return Err(StatusError::Unavailable),
        };

        Self::find_or_seed(store.as_ref())
            .await
            .and_then(|latest| {
                Ok(StatusResult {
                    timestamp: latest.timestamp_utc()?,
                    message: latest.text,
                    source: self.source.clone(),
                })
            })
            .map_err(|e| {
                error!(error = %e, "Error executing MongoDB query");
                StatusError::Store(e)
            })
    }

    async fn find_or_seed(store: &dyn MessageStore) -> Result<StatusMessage, StoreError> {
        let latest = match store.find_latest().await? {
            Some(latest) => latest,
            None => {
                info!("messages collection is empty, seeding default status message");
                store.create(StatusMessage::new(DEFAULT_MESSAGE_TEXT)?).await?
            }
        };
        latest.validate()?;
        Ok(latest)
    }
}
