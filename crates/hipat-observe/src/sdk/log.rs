use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::ctx::ObserveCtx;
use crate::model::{LogEvent, LogLevel};
use crate::pipeline::Redactor;

#[async_trait]
pub trait Logger: Send + Sync {
    async fn log(&self, ctx: &ObserveCtx, event: LogEvent);
}

pub struct NoopLogger;

#[async_trait]
impl Logger for NoopLogger {
    async fn log(&self, _ctx: &ObserveCtx, _event: LogEvent) {}
}

/// Forwards structured events to the process-wide `tracing` subscriber.
pub struct TracingLogger;

#[async_trait]
impl Logger for TracingLogger {
    async fn log(&self, _ctx: &ObserveCtx, event: LogEvent) {
        let fields = serde_json::Value::Object(event.fields.clone());
        match event.level {
            LogLevel::Debug => {
                tracing::debug!(target: "hipat::observe", mentor = event.mentor.as_deref(), %fields, "{}", event.message)
            }
            LogLevel::Info => {
                tracing::info!(target: "hipat::observe", mentor = event.mentor.as_deref(), %fields, "{}", event.message)
            }
            LogLevel::Warn => {
                tracing::warn!(target: "hipat::observe", mentor = event.mentor.as_deref(), %fields, "{}", event.message)
            }
            LogLevel::Error => {
                tracing::error!(target: "hipat::observe", mentor = event.mentor.as_deref(), %fields, "{}", event.message)
            }
        }
    }
}

pub struct LogBuilder {
    level: LogLevel,
    message: String,
    labels: BTreeMap<&'static str, String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl LogBuilder {
    pub fn new(level: LogLevel, message: &str) -> Self {
        Self {
            level,
            message: message.to_string(),
            labels: BTreeMap::new(),
            fields: serde_json::Map::new(),
        }
    }

    pub fn label(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.labels.insert(key, value.into());
        self
    }

    pub fn field(mut self, key: &str, value: serde_json::Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn finish(self, ctx: &ObserveCtx, redactor: &dyn Redactor) -> LogEvent {
        let mut event = LogEvent {
            level: self.level,
            message: self.message,
            mentor: ctx.mentor.clone(),
            resource: ctx.resource.clone(),
            action: ctx.action.clone(),
            labels: self.labels,
            fields: self.fields,
        };
        redactor.redact(&mut event);
        event
    }
}
