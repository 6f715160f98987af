//! Domain layer - Core business logic and entities

pub mod cereal;
pub mod error;

pub use cereal::{Cereal, CerealStorage, CerealValidationError, StorageSnapshot};
pub use error::DomainError;
