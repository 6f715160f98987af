//! Storage factory building storages from configuration

use crate::config::StorageConfig;
use crate::domain::cereal::CerealStorage;
use crate::domain::DomainError;

use super::in_memory::InMemoryCerealStorage;

/// Factory for creating storage instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates a storage behind the `CerealStorage` trait
    pub fn create(config: &StorageConfig) -> Result<Box<dyn CerealStorage>, DomainError> {
        Ok(Box::new(Self::create_in_memory(config)?))
    }

    /// Creates an in-memory storage
    pub fn create_in_memory(config: &StorageConfig) -> Result<InMemoryCerealStorage, DomainError> {
        InMemoryCerealStorage::new(config.container_capacity, config.storage_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cereal::Cereal;

    #[test]
    fn test_create_from_default_config() {
        let mut storage = StorageFactory::create(&StorageConfig::default()).unwrap();

        assert_eq!(storage.container_capacity(), 10.0);
        assert_eq!(storage.storage_capacity(), 20.0);
        assert_eq!(storage.add_cereal(Cereal::Rice, 12.5).unwrap(), 2.5);
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let result = StorageFactory::create(&StorageConfig::new(10.0, 5.0));

        assert!(matches!(result, Err(DomainError::InvalidArgument { .. })));
    }
}
