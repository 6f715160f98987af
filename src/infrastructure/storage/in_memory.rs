//! In-memory cereal storage implementation

use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::domain::cereal::{
    validate_amount, validate_capacities, Cereal, CerealStorage, StorageSnapshot,
};
use crate::domain::DomainError;

/// In-memory cereal storage
///
/// Containers are rendered in the order they were first allocated.
/// Data is lost when the value is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryCerealStorage {
    container_capacity: f32,
    storage_capacity: f32,
    containers: IndexMap<Cereal, f32>,
}

impl InMemoryCerealStorage {
    /// Creates an empty storage, validating both capacities
    pub fn new(container_capacity: f32, storage_capacity: f32) -> Result<Self, DomainError> {
        validate_capacities(container_capacity, storage_capacity)?;

        info!(container_capacity, storage_capacity, "Created cereal storage");

        Ok(Self {
            container_capacity,
            storage_capacity,
            containers: IndexMap::new(),
        })
    }

    /// A new container fits only while the allocated containers leave room for one more.
    ///
    /// Counts containers, not stored volume.
    fn can_allocate_container(&self) -> bool {
        (self.containers.len() as f32) * self.container_capacity < self.storage_capacity
    }

    fn container(&self, cereal: Cereal) -> Result<f32, DomainError> {
        self.containers.get(&cereal).copied().ok_or_else(|| {
            warn!(%cereal, "No container in storage");
            DomainError::not_found(format!("No container for {} in storage", cereal))
        })
    }
}

impl CerealStorage for InMemoryCerealStorage {
    fn container_capacity(&self) -> f32 {
        self.container_capacity
    }

    fn storage_capacity(&self) -> f32 {
        self.storage_capacity
    }

    fn add_cereal(&mut self, cereal: Cereal, amount: f32) -> Result<f32, DomainError> {
        validate_amount(amount)?;

        let current = match self.containers.get(&cereal) {
            Some(current) => *current,
            None if self.can_allocate_container() => 0.0,
            None => {
                warn!(
                    %cereal,
                    containers = self.containers.len(),
                    "Storage cannot fit another container"
                );
                return Err(DomainError::no_capacity(format!(
                    "Storage cannot fit a container for {}",
                    cereal
                )));
            }
        };

        let new_amount = current + amount;
        let stored = new_amount.min(self.container_capacity);
        let excess = (new_amount - self.container_capacity).max(0.0);

        self.containers.insert(cereal, stored);

        debug!(%cereal, amount, stored, excess, "Added cereal");

        Ok(excess)
    }

    fn get_cereal(&mut self, cereal: Cereal, amount: f32) -> Result<f32, DomainError> {
        validate_amount(amount)?;

        let current = self.container(cereal)?;
        let taken = current.min(amount);

        self.containers.insert(cereal, current - taken);

        debug!(%cereal, amount, taken, "Took cereal");

        Ok(taken)
    }

    fn remove_container(&mut self, cereal: Cereal) -> Result<bool, DomainError> {
        if self.container(cereal)? != 0.0 {
            debug!(%cereal, "Container is not empty, keeping it");
            return Ok(false);
        }

        self.containers.shift_remove(&cereal);
        debug!(%cereal, "Removed container");

        Ok(true)
    }

    fn get_amount(&self, cereal: Cereal) -> Result<f32, DomainError> {
        self.container(cereal)
    }

    fn get_space(&self, cereal: Cereal) -> Result<f32, DomainError> {
        Ok(self.container_capacity - self.container(cereal)?)
    }

    fn has_container(&self, cereal: Cereal) -> bool {
        self.containers.contains_key(&cereal)
    }

    fn container_count(&self) -> usize {
        self.containers.len()
    }

    fn snapshot(&self) -> StorageSnapshot {
        StorageSnapshot {
            container_capacity: self.container_capacity,
            storage_capacity: self.storage_capacity,
            containers: self.containers.clone(),
        }
    }
}

impl fmt::Display for InMemoryCerealStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
