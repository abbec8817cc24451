use hipat_errors::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct SubmissionError(pub Box<ErrorObj>);

impl SubmissionError {
    pub fn into_inner(self) -> ErrorObj {
        *self.0
    }

    pub fn not_found(id: &str) -> Self {
        SubmissionError(Box::new(
            ErrorBuilder::new(codes::STORAGE_NOT_FOUND)
                .user_msg("Submission no longer exists.")
                .dev_msg(format!("submission not found: {id}"))
                .build(),
        ))
    }

    pub fn unknown(msg: &str) -> Self {
        SubmissionError(Box::new(
            ErrorBuilder::new(codes::UNKNOWN_INTERNAL)
                .user_msg("Submission operation failed.")
                .dev_msg(msg)
                .build(),
        ))
    }
}
