use hipat_errors::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct StorageError(pub Box<ErrorObj>);

impl StorageError {
    pub fn into_inner(self) -> ErrorObj {
        *self.0
    }

    pub fn not_found(msg: &str) -> Self {
        StorageError(Box::new(
            ErrorBuilder::new(codes::STORAGE_NOT_FOUND)
                .user_msg("The requested record does not exist.")
                .dev_msg(msg)
                .build(),
        ))
    }

    pub fn conflict(msg: &str) -> Self {
        StorageError(Box::new(
            ErrorBuilder::new(codes::STORAGE_CONFLICT)
                .user_msg("The record already exists.")
                .dev_msg(msg)
                .build(),
        ))
    }

    pub fn bad_request(msg: &str) -> Self {
        StorageError(Box::new(
            ErrorBuilder::new(codes::SCHEMA_VALIDATION)
                .user_msg("The request was rejected by the store.")
                .dev_msg(msg)
                .build(),
        ))
    }

    pub fn internal(msg: &str) -> Self {
        StorageError(Box::new(
            ErrorBuilder::new(codes::UNKNOWN_INTERNAL)
                .user_msg("Storage operation failed.")
                .dev_msg(msg)
                .build(),
        ))
    }
}
