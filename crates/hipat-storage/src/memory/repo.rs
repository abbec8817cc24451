use super::datastore::MemoryDatastore;
use crate::errors::StorageError;
use crate::model::{Entity, Page, QueryParams};
use crate::spi::repo::Repository;
use async_trait::async_trait;
use hipat_types::prelude::MentorId;
use serde_json::{Map, Value};
use std::marker::PhantomData;

#[derive(Clone)]
pub struct InMemoryRepository<E: Entity> {
    store: MemoryDatastore,
    table: &'static str,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new(store: &MemoryDatastore) -> Self {
        Self {
            store: store.clone(),
            table: E::TABLE,
            _marker: PhantomData,
        }
    }
}

fn merge_patch(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target_map), Value::Object(patch_map)) => {
            for (k, v) in patch_map {
                merge_patch(target_map.entry(k).or_insert(Value::Null), v);
            }
        }
        (slot, value) => {
            *slot = value.clone();
        }
    }
}

fn matches_filter(value: &Value, filter: &Value) -> bool {
    match (value, filter) {
        (Value::Object(data), Value::Object(filter_map)) => filter_map
            .iter()
            .all(|(k, expected)| data.get(k).map(|actual| actual == expected).unwrap_or(false)),
        _ => true,
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity,
{
    async fn create(&self, mentor: &MentorId, entity: &E) -> Result<(), StorageError> {
        self.store.simulate_latency().await;
        if entity.mentor() != mentor {
            return Err(StorageError::bad_request("mentor mismatch"));
        }
        if self.store.fetch(self.table, mentor, entity.id()).is_some() {
            return Err(StorageError::conflict("entity already exists"));
        }
        let value =
            serde_json::to_value(entity).map_err(|e| StorageError::internal(&e.to_string()))?;
        self.store.store(self.table, mentor, entity.id(), value);
        Ok(())
    }

    async fn upsert(
        &self,
        mentor: &MentorId,
        id: &str,
        patch: Value,
    ) -> Result<E, StorageError> {
        self.store.simulate_latency().await;
        let mut base = self
            .store
            .fetch(self.table, mentor, id)
            .unwrap_or_else(|| Value::Object(Map::new()));
        merge_patch(&mut base, &patch);
        let mut map = base.as_object().cloned().unwrap_or_default();
        map.insert("id".into(), Value::String(id.to_string()));
        map.insert("mentor".into(), Value::String(mentor.0.clone()));
        let normalized = Value::Object(map);
        let entity: E = serde_json::from_value(normalized.clone())
            .map_err(|e| StorageError::internal(&e.to_string()))?;
        self.store.store(self.table, mentor, id, normalized);
        Ok(entity)
    }

    async fn get(&self, mentor: &MentorId, id: &str) -> Result<Option<E>, StorageError> {
        self.store.simulate_latency().await;
        let value = self.store.fetch(self.table, mentor, id);
        Ok(match value {
            Some(val) => Some(
                serde_json::from_value(val).map_err(|e| StorageError::internal(&e.to_string()))?,
            ),
            None => None,
        })
    }

    async fn select(
        &self,
        mentor: &MentorId,
        params: QueryParams,
    ) -> Result<Page<E>, StorageError> {
        self.store.simulate_latency().await;
        let values = self.store.list(self.table, mentor);
        let mut items = Vec::new();
        let limit = params.limit.unwrap_or(u32::MAX) as usize;
        for value in values {
            if !matches_filter(&value, &params.filter) {
                continue;
            }
            let entity: E = serde_json::from_value(value)
                .map_err(|e| StorageError::internal(&e.to_string()))?;
            items.push(entity);
            if items.len() >= limit {
                break;
            }
        }
        Ok(Page { items, next: None })
    }

    async fn delete(&self, mentor: &MentorId, id: &str) -> Result<(), StorageError> {
        self.store.simulate_latency().await;
        self.store
            .remove(self.table, mentor, id)
            .ok_or_else(|| StorageError::not_found("entity not found"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    struct Note {
        id: String,
        mentor: MentorId,
        body: String,
        pinned: bool,
    }

    impl Entity for Note {
        const TABLE: &'static str = "note";

        fn id(&self) -> &str {
            &self.id
        }

        fn mentor(&self) -> &MentorId {
            &self.mentor
        }
    }

    fn mentor() -> MentorId {
        MentorId("mentor-repo".into())
    }

    #[test]
    fn merge_patch_overwrites_nested_values() {
        let mut base = json!({"a": {"b": 1, "c": 2}});
        let patch = json!({"a": {"b": 3}});
        merge_patch(&mut base, &patch);
        assert_eq!(base, json!({"a": {"b": 3, "c": 2}}));
    }

    #[test]
    fn matches_filter_honors_missing_keys() {
        let value = json!({"mentor": "m", "id": "1"});
        assert!(!matches_filter(&value, &json!({"mentor": "m", "id": "missing"})));
        assert!(matches_filter(&value, &json!({"mentor": "m"})));
    }

    #[tokio::test]
    async fn create_checks_for_conflicts_and_owner() {
        let store = MemoryDatastore::new();
        let mentor = mentor();
        let repo: InMemoryRepository<Note> = InMemoryRepository::new(&store);

        let note = Note {
            id: "n-1".into(),
            mentor: mentor.clone(),
            body: "hello".into(),
            pinned: false,
        };

        repo.create(&mentor, &note).await.expect("first insert");
        let duplicate = repo.create(&mentor, &note).await.expect_err("conflict");
        assert!(duplicate.to_string().contains("entity already exists"));

        let other = MentorId("other".into());
        let mismatch = Note {
            mentor: other.clone(),
            ..note.clone()
        };
        let err = repo
            .create(&mentor, &mismatch)
            .await
            .expect_err("owner mismatch");
        assert!(err.to_string().contains("mentor mismatch"));
    }

    #[tokio::test]
    async fn upsert_merges_patch_and_normalizes_fields() {
        let store = MemoryDatastore::new();
        let repo: InMemoryRepository<Note> = InMemoryRepository::new(&store);
        let mentor = mentor();

        let created = repo
            .upsert(&mentor, "n-2", json!({"body": "new", "pinned": true}))
            .await
            .expect("upsert");
        assert_eq!(created.id, "n-2");
        assert_eq!(created.mentor, mentor);
        assert!(created.pinned);

        let patched = repo
            .upsert(&mentor, "n-2", json!({"pinned": false}))
            .await
            .expect("patch existing");
        assert_eq!(patched.body, "new");
        assert!(!patched.pinned);
    }

    #[tokio::test]
    async fn select_respects_filter_and_limit() {
        let store = MemoryDatastore::new();
        let repo: InMemoryRepository<Note> = InMemoryRepository::new(&store);
        let mentor = mentor();

        for idx in 0..3 {
            let note = Note {
                id: format!("n-{idx}"),
                mentor: mentor.clone(),
                body: "b".into(),
                pinned: idx % 2 == 0,
            };
            repo.create(&mentor, &note).await.unwrap();
        }

        let params = QueryParams {
            filter: json!({"pinned": true}),
            limit: Some(1),
        };
        let page = repo.select(&mentor, params).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(page.items[0].pinned);
    }

    #[tokio::test]
    async fn delete_errors_when_missing() {
        let store = MemoryDatastore::new();
        let repo: InMemoryRepository<Note> = InMemoryRepository::new(&store);
        let err = repo
            .delete(&mentor(), "missing")
            .await
            .expect_err("not found");
        assert!(err.to_string().contains("entity not found"));
    }
}
