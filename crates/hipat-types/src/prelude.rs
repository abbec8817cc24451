pub use crate::id::{ClientId, Id, MentorId};
pub use crate::time::{now_ms, Timestamp};
