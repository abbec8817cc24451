use crate::errors::StorageError;
use crate::model::{Entity, Page, QueryParams};
use async_trait::async_trait;
use hipat_types::prelude::MentorId;

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    async fn create(&self, mentor: &MentorId, entity: &E) -> Result<(), StorageError>;
    async fn upsert(
        &self,
        mentor: &MentorId,
        id: &str,
        patch: serde_json::Value,
    ) -> Result<E, StorageError>;
    async fn get(&self, mentor: &MentorId, id: &str) -> Result<Option<E>, StorageError>;
    async fn select(&self, mentor: &MentorId, params: QueryParams)
        -> Result<Page<E>, StorageError>;
    async fn delete(&self, mentor: &MentorId, id: &str) -> Result<(), StorageError>;
}
