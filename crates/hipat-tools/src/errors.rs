use hipat_errors::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct ToolError(pub Box<ErrorObj>);

impl ToolError {
    pub fn into_inner(self) -> ErrorObj {
        *self.0
    }

    pub fn not_found(tool_id: &str) -> Self {
        ToolError(Box::new(
            ErrorBuilder::new(codes::STORAGE_NOT_FOUND)
                .user_msg("Tool is not in the catalog.")
                .dev_msg(format!("tool not found: {tool_id}"))
                .build(),
        ))
    }

    pub fn not_configured(tool_id: &str, mode: &str) -> Self {
        ToolError(Box::new(
            ErrorBuilder::new(codes::TOOL_NOT_CONFIGURED)
                .user_msg("This tool has no usable link yet.")
                .dev_msg(format!("tool {tool_id} has no usable {mode} url"))
                .build(),
        ))
    }

    pub fn invalid_url(msg: &str) -> Self {
        ToolError(Box::new(
            ErrorBuilder::new(codes::SCHEMA_VALIDATION)
                .user_msg("The tool URL must start with http:// or https://.")
                .dev_msg(msg)
                .retry(RetryClass::Permanent)
                .build(),
        ))
    }

    pub fn policy(msg: &str) -> Self {
        ToolError(Box::new(
            ErrorBuilder::new(codes::POLICY_DENY)
                .user_msg("This change is not allowed for system tools.")
                .dev_msg(msg)
                .build(),
        ))
    }

    pub fn unknown(msg: &str) -> Self {
        ToolError(Box::new(
            ErrorBuilder::new(codes::UNKNOWN_INTERNAL)
                .user_msg("Tool catalog operation failed.")
                .dev_msg(msg)
                .build(),
        ))
    }
}
