use hipat_types::prelude::MentorId;
use serde::{Deserialize, Serialize};

/// A record owned by exactly one mentor. Every store keyed by mentor so
/// one mentor can never observe another's rows.
pub trait Entity: Sized + serde::de::DeserializeOwned + Serialize + Send + Sync {
    const TABLE: &'static str;
    fn id(&self) -> &str;
    fn mentor(&self) -> &MentorId;
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryParams {
    pub filter: serde_json::Value,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            filter: serde_json::json!({}),
            limit: None,
        }
    }
}
