pub use crate::codes;
pub use crate::model::{ErrorBuilder, ErrorCode, ErrorObj, PublicErrorView};
pub use crate::retry::RetryClass;
