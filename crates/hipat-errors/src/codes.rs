use crate::model::ErrorCode;

/// Tool has no usable URL for the requested launch mode. Not retryable;
/// hosts render a dedicated "not configured" state.
pub const TOOL_NOT_CONFIGURED: ErrorCode = ErrorCode("TOOL.NOT_CONFIGURED");

/// Embedded frame never signalled ready within the load deadline.
pub const CHANNEL_LOAD_TIMEOUT: ErrorCode = ErrorCode("CHANNEL.LOAD_TIMEOUT");

/// Embedded frame reported a native load failure.
pub const CHANNEL_LOAD_FAILED: ErrorCode = ErrorCode("CHANNEL.LOAD_FAILED");

/// Message arrived from an unexpected origin or frame. Internal only;
/// these are dropped silently, never surfaced to users.
pub const CHANNEL_ORIGIN_MISMATCH: ErrorCode = ErrorCode("CHANNEL.ORIGIN_MISMATCH");

/// Input failed structural validation (bad URL, missing contact email).
pub const SCHEMA_VALIDATION: ErrorCode = ErrorCode("SCHEMA.VALIDATION");

pub const STORAGE_NOT_FOUND: ErrorCode = ErrorCode("STORAGE.NOT_FOUND");
pub const STORAGE_CONFLICT: ErrorCode = ErrorCode("STORAGE.CONFLICT");

/// Operation refused by platform policy (e.g. deleting a system tool).
pub const POLICY_DENY: ErrorCode = ErrorCode("POLICY.DENY");

/// A collaborator (store, invite transport) is unavailable.
pub const PROVIDER_UNAVAILABLE: ErrorCode = ErrorCode("PROVIDER.UNAVAILABLE");

pub const UNKNOWN_INTERNAL: ErrorCode = ErrorCode("UNKNOWN.INTERNAL");
