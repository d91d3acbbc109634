use crate::error::StoreError;
use chrono::{DateTime as ChronoDateTime, SecondsFormat, Utc};
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A status record as persisted in the `messages` collection.
///
/// Documents written by other tools may omit `timestamp`; those read back
/// with the current time, matching the default applied on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub text: String,
    #[serde(default = "DateTime::now")]
    pub timestamp: DateTime,
}

impl StatusMessage {
    /// Creates an unsaved message stamped with the current time.
    pub fn new(text: impl Into<String>) -> Result<Self, StoreError> {
        Self::with_timestamp(text, DateTime::now())
    }

    pub fn with_timestamp(text: impl Into<String>, timestamp: DateTime) -> Result<Self, StoreError> {
        let message = Self {
            id: None,
            text: text.into(),
            timestamp,
        };
        message.validate()?;
        Ok(message)
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if self.text.trim().is_empty() {
            return Err(StoreError::InvalidRecord("text is empty".to_string()));
        }
        Ok(())
    }

    /// Fails for BSON dates outside the range chrono can represent.
    pub fn timestamp_utc(&self) -> Result<ChronoDateTime<Utc>, StoreError> {
        ChronoDateTime::from_timestamp_millis(self.timestamp.timestamp_millis())
            .ok_or_else(|| StoreError::InvalidRecord("timestamp out of range".to_string()))
    }
}

/// # Public Message Response
///
/// Body of a successful `GET /api/public-message`.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "success",
///   "message": "Welcome! This message was retrieved from MongoDB Atlas.",
///   "source": "MongoDB Atlas Cluster (zomota_db)",
///   "timestamp": "2025-04-19T12:00:00.000Z"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PublicMessageResponse {
    pub status: String,
    pub message: String,
    pub source: String,
    pub timestamp: String,
}

impl PublicMessageResponse {
    pub fn success(message: String, source: String, timestamp: ChronoDateTime<Utc>) -> Self {
        Self {
            status: "success".to_string(),
            message,
            source,
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
