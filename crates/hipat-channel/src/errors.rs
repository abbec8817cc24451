use hipat_errors::prelude::*;
use hipat_submissions::prelude::SubmissionError;
use hipat_tools::prelude::ToolError;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct ChannelError(pub Box<ErrorObj>);

impl ChannelError {
    pub fn into_inner(self) -> ErrorObj {
        *self.0
    }

    pub fn not_configured(tool_id: &str, mode: &str) -> Self {
        ChannelError(Box::new(
            ErrorBuilder::new(codes::TOOL_NOT_CONFIGURED)
                .user_msg("This tool has no usable link yet.")
                .dev_msg(format!("no usable {mode} url for tool {tool_id}"))
                .build(),
        ))
    }

    pub fn load_timeout(elapsed_ms: i64) -> Self {
        ChannelError(Box::new(
            ErrorBuilder::new(codes::CHANNEL_LOAD_TIMEOUT)
                .user_msg("The tool took too long to load. Try again.")
                .dev_msg(format!("no ready signal after {elapsed_ms}ms"))
                .retry(RetryClass::Transient)
                .build(),
        ))
    }

    pub fn load_failed(detail: &str) -> Self {
        ChannelError(Box::new(
            ErrorBuilder::new(codes::CHANNEL_LOAD_FAILED)
                .user_msg("The tool failed to load. Try again.")
                .dev_msg(detail)
                .retry(RetryClass::Transient)
                .build(),
        ))
    }

    pub fn missing_email() -> Self {
        ChannelError(Box::new(
            ErrorBuilder::new(codes::SCHEMA_VALIDATION)
                .user_msg("The tool did not provide a contact email, so this result cannot be saved.")
                .dev_msg("completion payload lacks a usable clientData.email")
                .build(),
        ))
    }

    pub fn unavailable(msg: &str) -> Self {
        ChannelError(Box::new(
            ErrorBuilder::new(codes::PROVIDER_UNAVAILABLE)
                .user_msg("Saving this result is temporarily unavailable.")
                .dev_msg(msg)
                .retry(RetryClass::Transient)
                .build(),
        ))
    }

    pub fn unknown(msg: &str) -> Self {
        ChannelError(Box::new(
            ErrorBuilder::new(codes::UNKNOWN_INTERNAL)
                .user_msg("Tool session failed.")
                .dev_msg(msg)
                .build(),
        ))
    }
}

impl From<ToolError> for ChannelError {
    fn from(err: ToolError) -> Self {
        ChannelError(Box::new(err.into_inner()))
    }
}

impl From<SubmissionError> for ChannelError {
    fn from(err: SubmissionError) -> Self {
        ChannelError(Box::new(err.into_inner()))
    }
}
