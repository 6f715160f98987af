//! Cereal storage domain
//!
//! Containers of fixed capacity, one per cereal kind, placed into a storage
//! that can only fit a limited number of them.

mod entity;
mod kind;
mod repository;
mod validation;

pub use entity::StorageSnapshot;
pub use kind::Cereal;
pub use repository::CerealStorage;
pub use validation::{validate_amount, validate_capacities, CerealValidationError};
