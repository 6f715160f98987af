//! Storage snapshot entity

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::kind::Cereal;

/// Copy of a storage's capacities and contents at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSnapshot {
    pub container_capacity: f32,
    pub storage_capacity: f32,
    /// Stored amount per allocated container, in allocation order
    pub containers: IndexMap<Cereal, f32>,
}

impl StorageSnapshot {
    /// Total amount of cereal across all containers
    pub fn total_amount(&self) -> f32 {
        self.containers.values().sum()
    }
}

impl fmt::Display for StorageSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (cereal, amount)) in self.containers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", cereal, amount)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(containers: &[(Cereal, f32)]) -> StorageSnapshot {
        StorageSnapshot {
            container_capacity: 10.0,
            storage_capacity: 20.0,
            containers: containers.iter().copied().collect(),
        }
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(snapshot(&[]).to_string(), "{}");
    }

    #[test]
    fn test_display_keeps_insertion_order() {
        let snap = snapshot(&[(Cereal::Rice, 10.0), (Cereal::Bulgur, 3.5)]);
        assert_eq!(snap.to_string(), "{RICE=10, BULGUR=3.5}");
    }

    #[test]
    fn test_total_amount() {
        let snap = snapshot(&[(Cereal::Peas, 5.5), (Cereal::Millet, 2.5)]);
        assert_eq!(snap.total_amount(), 8.0);
    }

    #[test]
    fn test_snapshot_serde() {
        let snap = snapshot(&[(Cereal::Rice, 1.5)]);
        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["container_capacity"], 10.0);
        assert_eq!(json["containers"]["RICE"], 1.5);

        let parsed: StorageSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, snap);
    }
}
