use crate::errors::RosterError;
use crate::invite::InviteSender;
use crate::model::{Client, NewClient};
use crate::roster::ClientRoster;
use hipat_submissions::prelude::{
    Submission, SubmissionId, SubmissionStatus, SubmissionStore,
};
use hipat_types::prelude::MentorId;
use std::sync::Arc;

/// What the mentor chose in the "add prospect" dialog.
#[derive(Clone, Copy, Debug, Default)]
pub struct PromotionDecision {
    pub add_to_roster: bool,
    pub send_invite: bool,
}

#[derive(Clone, Debug)]
pub struct PromotionOutcome {
    pub submission: Submission,
    pub client: Option<Client>,
}

/// Turns a submission into roster state.
///
/// Not transactional: client creation and the status write are separate
/// store calls. If the status write fails after the client was created,
/// the error is surfaced and the client is kept; re-running the promotion
/// repairs the submission record. Callers needing exactly-once must put
/// both stores behind one transactional boundary.
pub struct PromotionFlow {
    roster: Arc<dyn ClientRoster>,
    submissions: Arc<dyn SubmissionStore>,
    invites: Arc<dyn InviteSender>,
}

impl PromotionFlow {
    pub fn new(
        roster: Arc<dyn ClientRoster>,
        submissions: Arc<dyn SubmissionStore>,
        invites: Arc<dyn InviteSender>,
    ) -> Self {
        Self {
            roster,
            submissions,
            invites,
        }
    }

    pub async fn promote(
        &self,
        mentor: &MentorId,
        submission_id: &SubmissionId,
        decision: PromotionDecision,
    ) -> Result<PromotionOutcome, RosterError> {
        let submission = self
            .submissions
            .get(mentor, submission_id)
            .await?
            .ok_or_else(|| RosterError::not_found(&format!(
                "submission not found: {}",
                submission_id.0
            )))?;

        if submission.contact.email.trim().is_empty() {
            return Err(RosterError::missing_email(&submission_id.0));
        }

        let status = if decision.send_invite {
            SubmissionStatus::Invited
        } else {
            SubmissionStatus::Submitted
        };

        let client = if decision.add_to_roster {
            let created = self
                .roster
                .create_client(
                    mentor,
                    NewClient {
                        name: display_name(&submission),
                        email: submission.contact.email.clone(),
                        phone: submission.contact.phone.clone(),
                        source_submission: Some(submission.id.clone()),
                    },
                )
                .await?;
            tracing::info!(
                target: "hipat::roster",
                mentor = %mentor.0,
                client = %created.id.0,
                submission = %submission.id.0,
                "prospect added to roster"
            );
            Some(created)
        } else {
            None
        };

        let updated = self
            .submissions
            .update_status(
                mentor,
                submission_id,
                status,
                client.as_ref().map(|c| c.id.clone()),
            )
            .await
            .map_err(|err| {
                if let Some(client) = &client {
                    tracing::warn!(
                        target: "hipat::roster",
                        client = %client.id.0,
                        submission = %submission_id.0,
                        "client created but submission status write failed; keeping client"
                    );
                }
                err
            })?;

        if decision.send_invite {
            self.invites.send(mentor, &updated).await?;
        }

        Ok(PromotionOutcome {
            submission: updated,
            client,
        })
    }
}

/// Roster display name: the captured name when the tool provided one,
/// otherwise the email's local part.
fn display_name(submission: &Submission) -> String {
    submission
        .contact
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            submission
                .contact
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hipat_submissions::prelude::ClientContact;
    use hipat_tools::prelude::ToolId;

    fn submission_with(name: Option<&str>, email: &str) -> Submission {
        Submission {
            id: SubmissionId("sub_1".into()),
            tool_id: ToolId("body-comp".into()),
            mentor: MentorId("m1".into()),
            contact: ClientContact {
                name: name.map(str::to_string),
                email: email.into(),
                phone: None,
            },
            results: Default::default(),
            status: SubmissionStatus::Submitted,
            client_id: None,
            submitted_at: 0,
            invited_at: None,
            signed_up_at: None,
        }
    }

    #[test]
    fn display_name_prefers_captured_name() {
        let submission = submission_with(Some("Jamie R"), "a@b.com");
        assert_eq!(display_name(&submission), "Jamie R");
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        assert_eq!(display_name(&submission_with(None, "a@b.com")), "a");
        assert_eq!(display_name(&submission_with(Some("  "), "jamie@x.y")), "jamie");
    }
}
