pub use crate::catalog::{seed_catalog, ToolDef, ToolId, ToolUrlOverride};
pub use crate::errors::ToolError;
pub use crate::registry::{
    InMemoryToolRegistry, ListFilter, ToolRegistry, ToolState, UrlPatch,
};
pub use crate::share::{
    build_launch_url, effective_url, expected_origin, usable_url, validate_tool_url, LaunchMode,
    Theme,
};
