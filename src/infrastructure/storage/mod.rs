//! Storage infrastructure - Storage implementations

mod factory;
mod in_memory;

pub use factory::StorageFactory;
pub use in_memory::InMemoryCerealStorage;
