use hipat_types::prelude::MentorId;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::time::{sleep, Duration};

/// Mentor-bucketed JSON record store. The backing maps are mutated
/// atomically per call; no lock is held across an await point.
#[derive(Clone, Default)]
pub struct MemoryDatastore {
    inner: Arc<Inner>,
    latency_ms: u64,
}

#[derive(Default)]
struct Inner {
    records: RwLock<HashMap<String, HashMap<String, serde_json::Value>>>,
}

impl MemoryDatastore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay each repository operation by `ms`, standing in for the
    /// round trip a real backend would cost.
    pub fn with_latency_ms(mut self, ms: u64) -> Self {
        self.latency_ms = ms;
        self
    }

    pub(crate) async fn simulate_latency(&self) {
        if self.latency_ms > 0 {
            sleep(Duration::from_millis(self.latency_ms)).await;
        }
    }

    fn table_key(table: &str, mentor: &MentorId) -> String {
        format!("{}::{}", table, mentor.0)
    }

    pub fn store(&self, table: &str, mentor: &MentorId, id: &str, value: serde_json::Value) {
        let key = Self::table_key(table, mentor);
        let mut map = self.inner.records.write();
        map.entry(key).or_default().insert(id.to_string(), value);
    }

    pub fn fetch(&self, table: &str, mentor: &MentorId, id: &str) -> Option<serde_json::Value> {
        let key = Self::table_key(table, mentor);
        self.inner
            .records
            .read()
            .get(&key)
            .and_then(|m| m.get(id).cloned())
    }

    pub fn remove(&self, table: &str, mentor: &MentorId, id: &str) -> Option<serde_json::Value> {
        let key = Self::table_key(table, mentor);
        self.inner
            .records
            .write()
            .get_mut(&key)
            .and_then(|m| m.remove(id))
    }

    pub fn list(&self, table: &str, mentor: &MentorId) -> Vec<serde_json::Value> {
        let key = Self::table_key(table, mentor);
        self.inner
            .records
            .read()
            .get(&key)
            .map(|m| m.values().cloned().collect())
            .unwrap_or_default()
    }
}
