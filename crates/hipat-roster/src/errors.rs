use hipat_errors::prelude::*;
use hipat_storage::prelude::StorageError;
use hipat_submissions::prelude::SubmissionError;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct RosterError(pub Box<ErrorObj>);

impl RosterError {
    pub fn into_inner(self) -> ErrorObj {
        *self.0
    }

    pub fn missing_email(submission_id: &str) -> Self {
        RosterError(Box::new(
            ErrorBuilder::new(codes::SCHEMA_VALIDATION)
                .user_msg("A contact email is required before this prospect can be added.")
                .dev_msg(format!("submission {submission_id} has no usable email"))
                .build(),
        ))
    }

    pub fn not_found(msg: &str) -> Self {
        RosterError(Box::new(
            ErrorBuilder::new(codes::STORAGE_NOT_FOUND)
                .user_msg("The record no longer exists.")
                .dev_msg(msg)
                .build(),
        ))
    }

    pub fn unknown(msg: &str) -> Self {
        RosterError(Box::new(
            ErrorBuilder::new(codes::UNKNOWN_INTERNAL)
                .user_msg("Adding this prospect failed. Please try again.")
                .dev_msg(msg)
                .build(),
        ))
    }
}

impl From<StorageError> for RosterError {
    fn from(err: StorageError) -> Self {
        RosterError(Box::new(err.into_inner()))
    }
}

impl From<SubmissionError> for RosterError {
    fn from(err: SubmissionError) -> Self {
        RosterError(Box::new(err.into_inner()))
    }
}
