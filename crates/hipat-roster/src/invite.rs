use crate::errors::RosterError;
use async_trait::async_trait;
use hipat_submissions::prelude::Submission;
use hipat_types::prelude::MentorId;

/// Hands an invite off to whatever delivers it (email service, push,
/// in-app). The promotion flow only enqueues; delivery state lives with
/// the transport.
#[async_trait]
pub trait InviteSender: Send + Sync {
    async fn send(&self, mentor: &MentorId, submission: &Submission) -> Result<(), RosterError>;
}

pub struct NoopInviteSender;

#[async_trait]
impl InviteSender for NoopInviteSender {
    async fn send(&self, _mentor: &MentorId, _submission: &Submission) -> Result<(), RosterError> {
        Ok(())
    }
}
