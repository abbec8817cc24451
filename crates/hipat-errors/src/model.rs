use crate::retry::RetryClass;
use serde::Serialize;

/// Stable, machine-readable error code. The string form is part of the
/// platform contract; hosts branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(pub &'static str);

/// The shared error shape every crate-level error wraps.
///
/// `message_user` is safe to show end users; `message_dev` carries the
/// diagnostic detail and never crosses the public boundary.
#[derive(Clone, Debug, Serialize)]
pub struct ErrorObj {
    pub code: ErrorCode,
    pub message_user: String,
    pub message_dev: Option<String>,
    pub retry: RetryClass,
}

impl ErrorObj {
    pub fn to_public(&self) -> PublicErrorView {
        PublicErrorView {
            code: self.code.0,
            message: self.message_user.clone(),
            retryable: matches!(self.retry, RetryClass::Transient),
        }
    }
}

/// What leaves the platform boundary: code + user message, nothing else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublicErrorView {
    pub code: &'static str,
    pub message: String,
    pub retryable: bool,
}

pub struct ErrorBuilder {
    code: ErrorCode,
    message_user: Option<String>,
    message_dev: Option<String>,
    retry: RetryClass,
}

impl ErrorBuilder {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message_user: None,
            message_dev: None,
            retry: RetryClass::None,
        }
    }

    pub fn user_msg(mut self, msg: &str) -> Self {
        self.message_user = Some(msg.to_string());
        self
    }

    pub fn dev_msg(mut self, msg: impl Into<String>) -> Self {
        self.message_dev = Some(msg.into());
        self
    }

    pub fn retry(mut self, retry: RetryClass) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> ErrorObj {
        ErrorObj {
            code: self.code,
            message_user: self
                .message_user
                .unwrap_or_else(|| "Something went wrong.".to_string()),
            message_dev: self.message_dev,
            retry: self.retry,
        }
    }
}
