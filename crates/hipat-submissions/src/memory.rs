use crate::errors::SubmissionError;
use crate::model::{ClientContact, Submission, SubmissionId, SubmissionStatus};
use crate::store::SubmissionStore;
use async_trait::async_trait;
use hipat_tools::prelude::ToolId;
use hipat_types::prelude::{now_ms, ClientId, MentorId};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct InMemorySubmissionStore {
    inner: Arc<RwLock<HashMap<(String, String), Submission>>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(mentor: &MentorId, id: &SubmissionId) -> (String, String) {
        (mentor.0.clone(), id.0.clone())
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn create(
        &self,
        mentor: &MentorId,
        tool: &ToolId,
        contact: ClientContact,
        results: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Submission, SubmissionError> {
        let submission = Submission {
            id: SubmissionId::new_random(),
            tool_id: tool.clone(),
            mentor: mentor.clone(),
            contact,
            results,
            status: SubmissionStatus::Submitted,
            client_id: None,
            submitted_at: now_ms(),
            invited_at: None,
            signed_up_at: None,
        };
        let mut guard = self.inner.write();
        guard.insert(Self::key(mentor, &submission.id), submission.clone());
        Ok(submission)
    }

    async fn update_status(
        &self,
        mentor: &MentorId,
        id: &SubmissionId,
        status: SubmissionStatus,
        client_id: Option<ClientId>,
    ) -> Result<Submission, SubmissionError> {
        let mut guard = self.inner.write();
        let submission = guard
            .get_mut(&Self::key(mentor, id))
            .ok_or_else(|| SubmissionError::not_found(&id.0))?;

        submission.status = status;
        match status {
            SubmissionStatus::Invited => submission.invited_at = Some(now_ms()),
            SubmissionStatus::SignedUp => submission.signed_up_at = Some(now_ms()),
            _ => {}
        }
        if let Some(client_id) = client_id {
            submission.client_id = Some(client_id);
        }
        Ok(submission.clone())
    }

    async fn get(
        &self,
        mentor: &MentorId,
        id: &SubmissionId,
    ) -> Result<Option<Submission>, SubmissionError> {
        let guard = self.inner.read();
        Ok(guard.get(&Self::key(mentor, id)).cloned())
    }

    async fn list_for_mentor(
        &self,
        mentor: &MentorId,
    ) -> Result<Vec<Submission>, SubmissionError> {
        let guard = self.inner.read();
        let mut out: Vec<Submission> = guard
            .iter()
            .filter(|((owner, _), _)| owner == &mentor.0)
            .map(|(_, submission)| submission.clone())
            .collect();
        out.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(out)
    }
}
