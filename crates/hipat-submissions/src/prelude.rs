pub use crate::errors::SubmissionError;
pub use crate::memory::InMemorySubmissionStore;
pub use crate::model::{ClientContact, Submission, SubmissionId, SubmissionStatus};
pub use crate::store::SubmissionStore;
