use crate::errors::SubmissionError;
use crate::model::{ClientContact, Submission, SubmissionId, SubmissionStatus};
use async_trait::async_trait;
use hipat_tools::prelude::ToolId;
use hipat_types::prelude::{ClientId, MentorId};

#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Records a completed tool run. Inputs are validated upstream; a
    /// fresh id and `submitted_at` are minted here, status starts at
    /// `submitted`.
    async fn create(
        &self,
        mentor: &MentorId,
        tool: &ToolId,
        contact: ClientContact,
        results: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Submission, SubmissionError>;

    /// Applies a status write. Unknown id is a not-found signal and no
    /// record is touched. Stamps `invited_at` when the status becomes
    /// `invited`, `signed_up_at` when it becomes `signed_up`, and attaches
    /// `client_id` when supplied. Transition legality is not checked.
    async fn update_status(
        &self,
        mentor: &MentorId,
        id: &SubmissionId,
        status: SubmissionStatus,
        client_id: Option<ClientId>,
    ) -> Result<Submission, SubmissionError>;

    async fn get(
        &self,
        mentor: &MentorId,
        id: &SubmissionId,
    ) -> Result<Option<Submission>, SubmissionError>;

    /// Newest first.
    async fn list_for_mentor(&self, mentor: &MentorId)
        -> Result<Vec<Submission>, SubmissionError>;
}
