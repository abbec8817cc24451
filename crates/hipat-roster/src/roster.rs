use crate::errors::RosterError;
use crate::model::{Client, NewClient};
use async_trait::async_trait;
use hipat_storage::prelude::{
    InMemoryRepository, MemoryDatastore, QueryParams, Repository,
};
use hipat_types::prelude::{now_ms, ClientId, MentorId};
use std::sync::Arc;

#[async_trait]
pub trait ClientRoster: Send + Sync {
    async fn create_client(
        &self,
        mentor: &MentorId,
        fields: NewClient,
    ) -> Result<Client, RosterError>;

    async fn get(&self, mentor: &MentorId, id: &ClientId) -> Result<Option<Client>, RosterError>;

    async fn list(&self, mentor: &MentorId) -> Result<Vec<Client>, RosterError>;
}

/// Roster backed by the shared repository SPI, so swapping the memory
/// tier for a durable one is a constructor change.
#[derive(Clone)]
pub struct MemoryRoster {
    repo: Arc<InMemoryRepository<Client>>,
}

impl MemoryRoster {
    pub fn new(store: &MemoryDatastore) -> Self {
        Self {
            repo: Arc::new(InMemoryRepository::new(store)),
        }
    }
}

#[async_trait]
impl ClientRoster for MemoryRoster {
    async fn create_client(
        &self,
        mentor: &MentorId,
        fields: NewClient,
    ) -> Result<Client, RosterError> {
        let client = Client {
            id: ClientId::new_random(),
            mentor: mentor.clone(),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            source_submission: fields.source_submission,
            created_at: now_ms(),
        };
        self.repo.create(mentor, &client).await?;
        Ok(client)
    }

    async fn get(&self, mentor: &MentorId, id: &ClientId) -> Result<Option<Client>, RosterError> {
        Ok(self.repo.get(mentor, &id.0).await?)
    }

    async fn list(&self, mentor: &MentorId) -> Result<Vec<Client>, RosterError> {
        let page = self.repo.select(mentor, QueryParams::default()).await?;
        let mut items = page.items;
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }
}
