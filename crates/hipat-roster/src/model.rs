use hipat_storage::prelude::Entity;
use hipat_submissions::prelude::SubmissionId;
use hipat_types::prelude::{ClientId, MentorId};
use serde::{Deserialize, Serialize};

/// A roster entry. Owned exclusively by the mentor who created it; there
/// is no shared mutation path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub mentor: MentorId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// The submission this client was promoted from, when there was one.
    #[serde(default)]
    pub source_submission: Option<SubmissionId>,
    pub created_at: i64,
}

impl Entity for Client {
    const TABLE: &'static str = "client";

    fn id(&self) -> &str {
        &self.id.0
    }

    fn mentor(&self) -> &MentorId {
        &self.mentor
    }
}

/// Fields for a new roster entry, before the platform mints identity and
/// timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub source_submission: Option<SubmissionId>,
}
