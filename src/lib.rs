//! Cereal Storage
//!
//! A storage of fixed-capacity containers, one per cereal kind:
//! - Adding cereal allocates a container on first use and reports the overflow
//! - Taking cereal never removes a container, only `remove_container` does
//! - The storage fits a limited number of containers, counted by container capacity

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use self::config::AppConfig;
pub use domain::{Cereal, CerealStorage, DomainError, StorageSnapshot};
pub use infrastructure::storage::{InMemoryCerealStorage, StorageFactory};
