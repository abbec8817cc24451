use hipat_tools::prelude::ToolId;
use hipat_types::prelude::{ClientId, MentorId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    pub fn new_random() -> Self {
        Self(format!("sub_{}", uuid::Uuid::new_v4()))
    }
}

/// One-way progression by convention: `submitted → invited | signed_up →
/// became_client`. The store does not police transitions; the last write
/// wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Submitted,
    Invited,
    SignedUp,
    BecameClient,
}

impl SubmissionStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Invited => "invited",
            SubmissionStatus::SignedUp => "signed_up",
            SubmissionStatus::BecameClient => "became_client",
        }
    }
}

/// Contact details captured by the embedded tool. The email is the one
/// mandatory field; channel validation guarantees it before a contact
/// reaches the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientContact {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// One completed run of an embedded tool by a prospect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub tool_id: ToolId,
    pub mentor: MentorId,
    pub contact: ClientContact,
    /// Tool-specific result payload; the platform treats it as opaque.
    pub results: serde_json::Map<String, serde_json::Value>,
    pub status: SubmissionStatus,
    /// Set once at promotion time, never cleared.
    #[serde(default)]
    pub client_id: Option<ClientId>,
    pub submitted_at: i64,
    #[serde(default)]
    pub invited_at: Option<i64>,
    #[serde(default)]
    pub signed_up_at: Option<i64>,
}
