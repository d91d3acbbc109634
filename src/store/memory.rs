use super::MessageStore;
use crate::error::StoreError;
use crate::models::message::StatusMessage;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Vec-backed store used by the service and route tests.
#[derive(Default)]
pub struct InMemoryMessageStore {
    records: Mutex<Vec<StatusMessage>>,
    finds: AtomicUsize,
    creates: AtomicUsize,
}

impl InMemoryMessageStore {
    pub fn with_records(records: Vec<StatusMessage>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn find_count(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn find_latest(&self) -> Result<Option<StatusMessage>, StoreError> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        let records = self.records.lock().unwrap();
        Ok(records.iter().max_by_key(|m| m.timestamp.timestamp_millis()).cloned())
    }

    async fn create(&self, mut message: StatusMessage) -> Result<StatusMessage, StoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        message.id.get_or_insert_with(ObjectId::new);
        self.records.lock().unwrap().push(message.clone());
        Ok(message)
    }
}
