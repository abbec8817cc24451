pub use crate::errors::StorageError;
pub use crate::memory::{InMemoryRepository, MemoryDatastore};
pub use crate::model::{Entity, Page, QueryParams};
pub use crate::spi::repo::Repository;
