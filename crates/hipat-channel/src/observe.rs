use hipat_observe::prelude::{
    ContactRedactor, LogBuilder, LogLevel, Logger, MetricKind, MetricSpec, ObserveCtx,
};
use hipat_tools::prelude::ToolId;
use serde_json::json;

pub const CHANNEL_MESSAGES_TOTAL: MetricSpec = MetricSpec {
    name: "hipat_channel_messages_total",
    kind: MetricKind::Counter,
    help: "Messages delivered to tool sessions, before gating",
};

pub const CHANNEL_MESSAGES_DROPPED_TOTAL: MetricSpec = MetricSpec {
    name: "hipat_channel_messages_dropped_total",
    kind: MetricKind::Counter,
    help: "Messages discarded by the acceptance gate or after close",
};

pub const CHANNEL_COMPLETIONS_TOTAL: MetricSpec = MetricSpec {
    name: "hipat_channel_completions_total",
    kind: MetricKind::Counter,
    help: "Tool completions that produced a submission",
};

pub const CHANNEL_COMPLETIONS_REJECTED_TOTAL: MetricSpec = MetricSpec {
    name: "hipat_channel_completions_rejected_total",
    kind: MetricKind::Counter,
    help: "Tool completions rejected for a missing contact email",
};

pub const CHANNEL_LOAD_TIMEOUTS_TOTAL: MetricSpec = MetricSpec {
    name: "hipat_channel_load_timeouts_total",
    kind: MetricKind::Counter,
    help: "Frame loads that hit the deadline",
};

pub const CHANNEL_FRAME_HEIGHT: MetricSpec = MetricSpec {
    name: "hipat_channel_frame_height",
    kind: MetricKind::Gauge,
    help: "Last applied frame height after clamping",
};

pub const CHANNEL_LOAD_LATENCY_MS: MetricSpec = MetricSpec {
    name: "hipat_channel_load_latency_ms",
    kind: MetricKind::Gauge,
    help: "Last observed frame load latency (ms)",
};

pub fn ctx_for_session(mentor: &str, tool: &ToolId) -> ObserveCtx {
    let mut ctx = ObserveCtx::for_mentor(mentor);
    ctx.resource = Some(tool.0.clone());
    ctx.action = Some("tool_session".into());
    ctx
}

pub struct LogCompletionParams<'a> {
    pub tool: &'a ToolId,
    pub submission_id: &'a str,
    pub email: &'a str,
    pub mode: &'a str,
}

/// Contact data passes through the redactor; only the masked form is
/// handed to the sink.
pub async fn log_completion(
    logger: &dyn Logger,
    ctx: &ObserveCtx,
    params: LogCompletionParams<'_>,
) {
    let event = LogBuilder::new(LogLevel::Info, "tool completion recorded")
        .label("tool_id", params.tool.0.clone())
        .label("mode", params.mode)
        .field("submission_id", json!(params.submission_id))
        .field("email", json!(params.email))
        .finish(ctx, &ContactRedactor);
    logger.log(ctx, event).await;
}
