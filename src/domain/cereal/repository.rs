//! Cereal storage trait definition

use std::fmt::Debug;

use crate::domain::DomainError;

use super::entity::StorageSnapshot;
use super::kind::Cereal;

/// Storage of fixed-capacity cereal containers, one container per cereal kind
pub trait CerealStorage: Debug {
    /// Maximum amount a single container can hold
    fn container_capacity(&self) -> f32;

    /// Total capacity of the storage, in container-capacity units
    fn storage_capacity(&self) -> f32;

    /// Adds cereal to its container, allocating the container on first use.
    ///
    /// Returns the excess that did not fit into the container.
    fn add_cereal(&mut self, cereal: Cereal, amount: f32) -> Result<f32, DomainError>;

    /// Takes up to `amount` of cereal out of its container and returns what was taken
    fn get_cereal(&mut self, cereal: Cereal, amount: f32) -> Result<f32, DomainError>;

    /// Removes an empty container, returns false if the container still holds cereal
    fn remove_container(&mut self, cereal: Cereal) -> Result<bool, DomainError>;

    /// Returns the amount of cereal stored in the container
    fn get_amount(&self, cereal: Cereal) -> Result<f32, DomainError>;

    /// Returns the free space left in the container
    fn get_space(&self, cereal: Cereal) -> Result<f32, DomainError>;

    /// Checks whether a container is allocated for the cereal
    fn has_container(&self, cereal: Cereal) -> bool;

    /// Returns the number of allocated containers
    fn container_count(&self) -> usize;

    /// Returns a point-in-time copy of the storage contents
    fn snapshot(&self) -> StorageSnapshot;

    /// Human-readable rendering of the contents, e.g. `{BULGUR=3, RICE=10}`
    fn describe(&self) -> String {
        self.snapshot().to_string()
    }
}
