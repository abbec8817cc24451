use std::sync::Arc;

use hipat::channel::prelude::*;
use hipat::observe::prelude::{MeterRegistry, NoopLogger};
use hipat::roster::prelude::*;
use hipat::storage::prelude::MemoryDatastore;
use hipat::submissions::prelude::{InMemorySubmissionStore, SubmissionStatus, SubmissionStore};
use hipat::tools::prelude::{InMemoryToolRegistry, LaunchMode, Theme, ToolId, ToolRegistry};
use hipat::types::prelude::MentorId;
use serde_json::json;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn end_to_end_pipeline_promotes_a_tool_completion() {
    let registry = Arc::new(InMemoryToolRegistry::seeded());
    let submissions = Arc::new(InMemorySubmissionStore::new());
    let datastore = MemoryDatastore::new().with_latency_ms(2);
    let roster = Arc::new(MemoryRoster::new(&datastore));
    let meter = Arc::new(MeterRegistry::default());
    let mentor = MentorId("m1".into());

    // Mentor opens the assessment in a live session.
    let mut session = ToolSession::new(
        registry.clone(),
        ToolId("body-comp".into()),
        mentor.clone(),
        "Coach Alex",
        LaunchMode::Live,
        Theme::Light,
    )
    .with_submissions(submissions.clone())
    .with_observe(meter.clone(), Arc::new(NoopLogger));

    let frame = session.open(0).await.expect("open");
    assert!(frame.src.contains("mentorId=m1"));
    assert!(frame.src.contains("callback=postMessage"));
    let frame_id = frame.id.clone();

    // The embedded tool signals ready, then resizes, then completes.
    let origin = "https://tools.hipat.example";
    session
        .handle_message(
            MessageEnvelope {
                source: frame_id.clone(),
                origin: origin.into(),
                message: ToolMessage::Ready,
            },
            900,
        )
        .await
        .expect("ready");
    assert_eq!(session.state(), ChannelState::Ready);

    session
        .handle_message(
            MessageEnvelope {
                source: frame_id.clone(),
                origin: origin.into(),
                message: ToolMessage::Resize { height: Some(2000) },
            },
            950,
        )
        .await
        .expect("resize");
    assert_eq!(session.frame().unwrap().height, 800);

    let mut results = serde_json::Map::new();
    results.insert("body_fat_pct".into(), json!(21.4));
    let outcome = session
        .handle_message(
            MessageEnvelope {
                source: frame_id.clone(),
                origin: origin.into(),
                message: ToolMessage::Complete {
                    client_data: Some(ClientData {
                        name: None,
                        email: Some("jamie@fit.example".into()),
                        phone: None,
                    }),
                    results: Some(results),
                },
            },
            1_000,
        )
        .await
        .expect("complete");

    let submission = match outcome {
        MessageOutcome::Completed(submission) => submission,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(session.state(), ChannelState::Closed);
    assert_eq!(submission.status, SubmissionStatus::Submitted);

    // Mentor adds the prospect to the roster without sending an invite.
    let flow = PromotionFlow::new(
        roster.clone(),
        submissions.clone(),
        Arc::new(NoopInviteSender),
    );
    let promoted = flow
        .promote(
            &mentor,
            &submission.id,
            PromotionDecision {
                add_to_roster: true,
                send_invite: false,
            },
        )
        .await
        .expect("promote");

    let client = promoted.client.expect("client created");
    assert_eq!(client.name, "jamie");
    assert_eq!(promoted.submission.client_id, Some(client.id.clone()));
    assert_eq!(promoted.submission.status, SubmissionStatus::Submitted);

    // The roster and submission list agree with what the dashboard shows.
    let roster_view = roster.list(&mentor).await.expect("roster");
    assert_eq!(roster_view.len(), 1);
    assert_eq!(roster_view[0].email, "jamie@fit.example");

    let submission_view = submissions.list_for_mentor(&mentor).await.expect("list");
    assert_eq!(submission_view.len(), 1);

    // Catalog reads stay consistent for the dashboard tool grid.
    let tools = registry
        .list(&hipat::tools::prelude::ListFilter::default())
        .await
        .expect("tools");
    assert_eq!(tools.len(), 3);
}
