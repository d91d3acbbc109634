use crate::error::StoreError;
use crate::models::message::StatusMessage;
use async_trait::async_trait;

#[cfg(test)]
pub mod memory;
pub mod mongo;

pub use mongo::MongoMessageStore;

/// # Status Message Store
///
/// Persistence seam for status records. Reading the newest record and
/// seeding a new one are kept as separate operations; the find-or-create
/// rule lives in [`StatusService`](crate::service::StatusService).
///
/// Implementations must be safe to share across actix workers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Returns the record with the greatest `timestamp`, if any.
    async fn find_latest(&self) -> Result<Option<StatusMessage>, StoreError>;

    /// Persists `message` and returns it with its assigned id.
    async fn create(&self, message: StatusMessage) -> Result<StatusMessage, StoreError>;
}
