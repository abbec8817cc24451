use crate::config::ChannelConfig;
use crate::errors::ChannelError;
use crate::gate::{self, DropReason};
use crate::observe::{
    ctx_for_session, log_completion, LogCompletionParams, CHANNEL_COMPLETIONS_REJECTED_TOTAL,
    CHANNEL_COMPLETIONS_TOTAL, CHANNEL_FRAME_HEIGHT, CHANNEL_LOAD_LATENCY_MS,
    CHANNEL_LOAD_TIMEOUTS_TOTAL, CHANNEL_MESSAGES_DROPPED_TOTAL, CHANNEL_MESSAGES_TOTAL,
};
use crate::protocol::{ClientData, FrameId, MessageEnvelope, ToolMessage};
use hipat_errors::prelude::PublicErrorView;
use hipat_observe::prelude::{Logger, Meter, NoopLogger, NoopMeter};
use hipat_submissions::prelude::{ClientContact, Submission, SubmissionStore};
use hipat_tools::prelude::{
    build_launch_url, effective_url, expected_origin, LaunchMode, Theme, ToolId, ToolRegistry,
};
use hipat_types::prelude::MentorId;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelState {
    Idle,
    Loading,
    Ready,
    Error,
    TimedOut,
    Closed,
}

impl ChannelState {
    pub const fn as_str(self) -> &'static str {
        match self {
            ChannelState::Idle => "idle",
            ChannelState::Loading => "loading",
            ChannelState::Ready => "ready",
            ChannelState::Error => "error",
            ChannelState::TimedOut => "timed_out",
            ChannelState::Closed => "closed",
        }
    }
}

/// The sandboxed frame as the host sees it: identity, current src and the
/// displayed height.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameHandle {
    pub id: FrameId,
    pub src: String,
    pub height: u32,
}

#[derive(Clone, Debug)]
pub enum MessageOutcome {
    /// Discarded without side effects. The reason stays inside the host.
    Ignored(DropReason),
    MarkedReady,
    Resized(u32),
    Cancelled,
    Completed(Submission),
}

/// One embedded tool dialog, from frame creation to completion or
/// dismissal. Single consumer: the host delivers messages one at a time.
///
/// Timekeeping is explicit. The host calls `tick(now_ms)` from its timer;
/// the deadline fires at most once and is disarmed by any terminating
/// transition.
pub struct ToolSession {
    registry: Arc<dyn ToolRegistry>,
    submissions: Option<Arc<dyn SubmissionStore>>,
    meter: Arc<dyn Meter>,
    logger: Arc<dyn Logger>,
    config: ChannelConfig,
    tool_id: ToolId,
    mentor: MentorId,
    mentor_name: String,
    mode: LaunchMode,
    theme: Theme,
    state: ChannelState,
    frame: Option<FrameHandle>,
    loading_since: Option<i64>,
    completed: bool,
    last_error: Option<PublicErrorView>,
}

impl ToolSession {
    pub fn new(
        registry: Arc<dyn ToolRegistry>,
        tool_id: ToolId,
        mentor: MentorId,
        mentor_name: impl Into<String>,
        mode: LaunchMode,
        theme: Theme,
    ) -> Self {
        Self {
            registry,
            submissions: None,
            meter: Arc::new(NoopMeter),
            logger: Arc::new(NoopLogger),
            config: ChannelConfig::default(),
            tool_id,
            mentor,
            mentor_name: mentor_name.into(),
            mode,
            theme,
            state: ChannelState::Idle,
            frame: None,
            loading_since: None,
            completed: false,
            last_error: None,
        }
    }

    pub fn with_submissions(mut self, store: Arc<dyn SubmissionStore>) -> Self {
        self.submissions = Some(store);
        self
    }

    pub fn with_observe(mut self, meter: Arc<dyn Meter>, logger: Arc<dyn Logger>) -> Self {
        self.meter = meter;
        self.logger = logger;
        self
    }

    pub fn with_config(mut self, config: ChannelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn state(&self) -> ChannelState {
        self.state
    }

    pub fn frame(&self) -> Option<&FrameHandle> {
        self.frame.as_ref()
    }

    pub fn last_error(&self) -> Option<&PublicErrorView> {
        self.last_error.as_ref()
    }

    /// Resolves the launch URL and attaches the frame. A tool without a
    /// usable URL for this mode never gets a frame: the session stays
    /// `Idle` and the caller renders its "not configured" treatment.
    pub async fn open(&mut self, now_ms: i64) -> Result<&FrameHandle, ChannelError> {
        if self.state != ChannelState::Idle {
            return Err(ChannelError::unknown(&format!(
                "open called in state {}",
                self.state.as_str()
            )));
        }
        let src = self.resolve_src().await?;
        self.state = ChannelState::Loading;
        self.loading_since = Some(now_ms);
        self.last_error = None;
        Ok(self.frame.insert(FrameHandle {
            id: FrameId::new_random(),
            src,
            height: self.config.min_frame_height,
        }))
    }

    async fn resolve_src(&self) -> Result<String, ChannelError> {
        let def = self
            .registry
            .get(&self.tool_id)
            .await?
            .ok_or_else(|| {
                ChannelError::not_configured(&self.tool_id.0, self.mode.as_str())
            })?;
        let base = effective_url(&def, &self.mentor, self.mode).ok_or_else(|| {
            ChannelError::not_configured(&self.tool_id.0, self.mode.as_str())
        })?;
        Ok(build_launch_url(
            &base,
            &self.mentor,
            &self.mentor_name,
            self.mode,
            self.theme,
        ))
    }

    /// Native load event from the frame. Equivalent to `TOOL_READY` for
    /// tools that never speak the protocol.
    pub fn on_frame_load(&mut self, now_ms: i64) {
        if self.state == ChannelState::Loading {
            self.mark_ready(now_ms);
        }
    }

    /// Native load failure. Terminal but recoverable through `retry`.
    pub fn on_frame_error(&mut self, detail: &str) {
        if self.state == ChannelState::Loading {
            self.state = ChannelState::Error;
            self.loading_since = None;
            self.last_error = Some(ChannelError::load_failed(detail).0.to_public());
        }
    }

    /// Wall-clock pulse from the host. Fires the load deadline when the
    /// session is still loading; otherwise a no-op.
    pub fn tick(&mut self, now_ms: i64) -> ChannelState {
        if self.state == ChannelState::Loading {
            if let Some(since) = self.loading_since {
                let elapsed = now_ms - since;
                if elapsed >= self.config.load_timeout_ms {
                    self.state = ChannelState::TimedOut;
                    self.loading_since = None;
                    self.last_error = Some(ChannelError::load_timeout(elapsed).0.to_public());
                    self.meter.counter(&CHANNEL_LOAD_TIMEOUTS_TOTAL).inc(1);
                }
            }
        }
        self.state
    }

    /// Re-issues the load after a timeout or load failure: the frame keeps
    /// its identity, gets a freshly resolved src, and the session returns
    /// to `Loading` with the error cleared.
    pub async fn retry(&mut self, now_ms: i64) -> Result<&FrameHandle, ChannelError> {
        if !matches!(self.state, ChannelState::Error | ChannelState::TimedOut) {
            return Err(ChannelError::unknown(&format!(
                "retry called in state {}",
                self.state.as_str()
            )));
        }
        let src = self.resolve_src().await?;
        let frame = self
            .frame
            .as_mut()
            .ok_or_else(|| ChannelError::unknown("retry without an attached frame"))?;
        frame.src = src;
        self.state = ChannelState::Loading;
        self.loading_since = Some(now_ms);
        self.last_error = None;
        Ok(frame)
    }

    /// Dismisses the dialog. Valid from any state; disarms the deadline.
    pub fn close(&mut self) {
        self.state = ChannelState::Closed;
        self.loading_since = None;
    }

    /// Applies one inbound message. Gate rejections and post-close
    /// messages come back as `Ignored`, never as errors, and never with
    /// payload detail attached.
    pub async fn handle_message(
        &mut self,
        envelope: MessageEnvelope,
        now_ms: i64,
    ) -> Result<MessageOutcome, ChannelError> {
        self.meter.counter(&CHANNEL_MESSAGES_TOTAL).inc(1);

        if self.state == ChannelState::Closed || self.completed {
            return Ok(self.drop_message(DropReason::ChannelClosed));
        }
        let expected_source = match &self.frame {
            Some(frame) => frame.id.clone(),
            None => return Ok(self.drop_message(DropReason::SourceMismatch)),
        };

        // The origin is recomputed from the catalog on every message, so
        // a URL reconfiguration mid-session takes effect immediately.
        let expected_origin = match self.registry.get(&self.tool_id).await {
            Ok(Some(def)) => expected_origin(&def, &self.mentor, self.mode),
            Ok(None) | Err(_) => None,
        };
        if let Err(reason) = gate::admit(&expected_source, expected_origin.as_deref(), &envelope) {
            return Ok(self.drop_message(reason));
        }

        match envelope.message {
            ToolMessage::Ready => {
                if self.state == ChannelState::Loading {
                    self.mark_ready(now_ms);
                }
                Ok(MessageOutcome::MarkedReady)
            }
            ToolMessage::Resize { height: None } => {
                Ok(self.drop_message(DropReason::Malformed))
            }
            ToolMessage::Resize {
                height: Some(requested),
            } => {
                let applied = self.config.clamp_height(requested);
                if let Some(frame) = self.frame.as_mut() {
                    frame.height = applied;
                }
                self.meter
                    .gauge(&CHANNEL_FRAME_HEIGHT)
                    .set(u64::from(applied));
                Ok(MessageOutcome::Resized(applied))
            }
            ToolMessage::Cancel => {
                self.close();
                Ok(MessageOutcome::Cancelled)
            }
            ToolMessage::Complete {
                client_data,
                results,
            } => self.complete(client_data, results).await,
        }
    }

    fn mark_ready(&mut self, now_ms: i64) {
        if let Some(since) = self.loading_since.take() {
            let latency = (now_ms - since).max(0) as u64;
            self.meter.gauge(&CHANNEL_LOAD_LATENCY_MS).set(latency);
        }
        self.state = ChannelState::Ready;
        self.last_error = None;
    }

    fn drop_message(&self, reason: DropReason) -> MessageOutcome {
        self.meter.counter(&CHANNEL_MESSAGES_DROPPED_TOTAL).inc(1);
        tracing::trace!(
            target: "hipat::channel",
            reason = reason.as_str(),
            "dropped embedded tool message"
        );
        MessageOutcome::Ignored(reason)
    }

    async fn complete(
        &mut self,
        client_data: Option<ClientData>,
        results: Option<serde_json::Map<String, serde_json::Value>>,
    ) -> Result<MessageOutcome, ChannelError> {
        let data = client_data.unwrap_or_default();
        let email = data.email.as_deref().map(str::trim).unwrap_or("");
        if email.is_empty() {
            self.meter
                .counter(&CHANNEL_COMPLETIONS_REJECTED_TOTAL)
                .inc(1);
            return Err(ChannelError::missing_email());
        }

        let store = self
            .submissions
            .clone()
            .ok_or_else(|| ChannelError::unavailable("no submission store attached"))?;
        let contact = ClientContact {
            name: data.name.filter(|name| !name.trim().is_empty()),
            email: email.to_string(),
            phone: data.phone,
        };
        let submission = store
            .create(
                &self.mentor,
                &self.tool_id,
                contact,
                results.unwrap_or_default(),
            )
            .await?;

        self.completed = true;
        self.close();
        self.meter.counter(&CHANNEL_COMPLETIONS_TOTAL).inc(1);

        let ctx = ctx_for_session(&self.mentor.0, &self.tool_id);
        log_completion(
            self.logger.as_ref(),
            &ctx,
            LogCompletionParams {
                tool: &self.tool_id,
                submission_id: &submission.id.0,
                email: &submission.contact.email,
                mode: self.mode.as_str(),
            },
        )
        .await;

        Ok(MessageOutcome::Completed(submission))
    }
}
