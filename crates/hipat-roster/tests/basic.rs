use hipat_roster::prelude::*;
use hipat_storage::prelude::MemoryDatastore;
use hipat_submissions::prelude::{
    ClientContact, InMemorySubmissionStore, SubmissionStatus, SubmissionStore,
};
use hipat_tools::prelude::ToolId;
use hipat_types::prelude::MentorId;
use parking_lot::Mutex;
use std::sync::Arc;

struct Harness {
    roster: Arc<MemoryRoster>,
    submissions: Arc<InMemorySubmissionStore>,
    invites: Arc<RecordingInviteSender>,
    flow: PromotionFlow,
    mentor: MentorId,
}

#[derive(Default)]
struct RecordingInviteSender {
    sent: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl InviteSender for RecordingInviteSender {
    async fn send(
        &self,
        _mentor: &MentorId,
        submission: &hipat_submissions::prelude::Submission,
    ) -> Result<(), RosterError> {
        self.sent.lock().push(submission.contact.email.clone());
        Ok(())
    }
}

fn harness() -> Harness {
    let datastore = MemoryDatastore::new();
    let roster = Arc::new(MemoryRoster::new(&datastore));
    let submissions = Arc::new(InMemorySubmissionStore::new());
    let invites = Arc::new(RecordingInviteSender::default());
    let flow = PromotionFlow::new(roster.clone(), submissions.clone(), invites.clone());
    Harness {
        roster,
        submissions,
        invites,
        flow,
        mentor: MentorId("m1".into()),
    }
}

async fn seed_submission(h: &Harness, name: Option<&str>, email: &str) -> hipat_submissions::prelude::Submission {
    h.submissions
        .create(
            &h.mentor,
            &ToolId("body-comp".into()),
            ClientContact {
                name: name.map(str::to_string),
                email: email.into(),
                phone: Some("+15550100".into()),
            },
            Default::default(),
        )
        .await
        .expect("seed submission")
}

#[tokio::test]
async fn promotion_without_invite_creates_named_client() {
    let h = harness();
    let submission = seed_submission(&h, None, "a@b.com").await;

    let outcome = h
        .flow
        .promote(
            &h.mentor,
            &submission.id,
            PromotionDecision {
                add_to_roster: true,
                send_invite: false,
            },
        )
        .await
        .expect("promote");

    let client = outcome.client.expect("client created");
    assert_eq!(client.name, "a");
    assert_eq!(client.email, "a@b.com");
    assert_eq!(client.source_submission, Some(submission.id.clone()));

    assert_eq!(outcome.submission.status, SubmissionStatus::Submitted);
    assert_eq!(outcome.submission.client_id, Some(client.id.clone()));
    assert!(outcome.submission.invited_at.is_none());
    assert!(h.invites.sent.lock().is_empty());

    let roster = h.roster.list(&h.mentor).await.unwrap();
    assert_eq!(roster.len(), 1);
}

#[tokio::test]
async fn promotion_with_invite_marks_invited_and_enqueues() {
    let h = harness();
    let submission = seed_submission(&h, Some("Jamie R"), "jamie@fit.example").await;

    let outcome = h
        .flow
        .promote(
            &h.mentor,
            &submission.id,
            PromotionDecision {
                add_to_roster: true,
                send_invite: true,
            },
        )
        .await
        .expect("promote");

    let client = outcome.client.expect("client created");
    assert_eq!(client.name, "Jamie R");
    assert_eq!(outcome.submission.status, SubmissionStatus::Invited);
    assert!(outcome.submission.invited_at.is_some());
    assert_eq!(h.invites.sent.lock().as_slice(), ["jamie@fit.example"]);
}

#[tokio::test]
async fn invite_only_promotion_creates_no_client() {
    let h = harness();
    let submission = seed_submission(&h, Some("Sam"), "sam@fit.example").await;

    let outcome = h
        .flow
        .promote(
            &h.mentor,
            &submission.id,
            PromotionDecision {
                add_to_roster: false,
                send_invite: true,
            },
        )
        .await
        .expect("promote");

    assert!(outcome.client.is_none());
    assert_eq!(outcome.submission.status, SubmissionStatus::Invited);
    assert!(outcome.submission.client_id.is_none());
    assert!(h.roster.list(&h.mentor).await.unwrap().is_empty());
}

#[tokio::test]
async fn promotion_refuses_missing_email() {
    let h = harness();
    let submission = seed_submission(&h, Some("Jamie"), "  ").await;

    let err = h
        .flow
        .promote(
            &h.mentor,
            &submission.id,
            PromotionDecision {
                add_to_roster: true,
                send_invite: false,
            },
        )
        .await
        .expect_err("missing email");
    assert_eq!(err.0.code.0, "SCHEMA.VALIDATION");
    assert!(h.roster.list(&h.mentor).await.unwrap().is_empty());
}

#[tokio::test]
async fn promotion_of_unknown_submission_is_not_found() {
    let h = harness();
    let err = h
        .flow
        .promote(
            &h.mentor,
            &hipat_submissions::prelude::SubmissionId("sub_missing".into()),
            PromotionDecision::default(),
        )
        .await
        .expect_err("not found");
    assert_eq!(err.0.code.0, "STORAGE.NOT_FOUND");
}

#[tokio::test]
async fn roster_is_isolated_per_mentor() {
    let h = harness();
    let submission = seed_submission(&h, Some("Jamie"), "jamie@fit.example").await;
    h.flow
        .promote(
            &h.mentor,
            &submission.id,
            PromotionDecision {
                add_to_roster: true,
                send_invite: false,
            },
        )
        .await
        .expect("promote");

    let other = MentorId("m2".into());
    assert!(h.roster.list(&other).await.unwrap().is_empty());
}
