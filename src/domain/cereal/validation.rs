//! Cereal storage validation utilities

use std::fmt;

use crate::domain::DomainError;

/// Cereal storage validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum CerealValidationError {
    /// Container capacity is negative or not a number
    InvalidContainerCapacity { value: f32 },
    /// Storage capacity cannot hold a single container
    StorageCapacityTooSmall { storage: f32, container: f32 },
    /// Amount is negative or not a number
    InvalidAmount { value: f32 },
    /// Name does not match any supported cereal
    UnknownCereal { name: String },
}

impl fmt::Display for CerealValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidContainerCapacity { value } => {
                write!(f, "Container capacity cannot be negative: {}", value)
            }
            Self::StorageCapacityTooSmall { storage, container } => {
                write!(
                    f,
                    "Storage capacity {} is lower than container capacity {}",
                    storage, container
                )
            }
            Self::InvalidAmount { value } => {
                write!(f, "Cereal amount must be a non-negative number: {}", value)
            }
            Self::UnknownCereal { name } => write!(f, "Unknown cereal '{}'", name),
        }
    }
}

impl std::error::Error for CerealValidationError {}

impl From<CerealValidationError> for DomainError {
    fn from(err: CerealValidationError) -> Self {
        DomainError::invalid_argument(err.to_string())
    }
}

/// Validate a pair of storage capacities
pub fn validate_capacities(
    container_capacity: f32,
    storage_capacity: f32,
) -> Result<(), CerealValidationError> {
    // NaN fails every comparison, so test for the valid range instead of the invalid one
    if !(container_capacity >= 0.0) {
        return Err(CerealValidationError::InvalidContainerCapacity {
            value: container_capacity,
        });
    }

    if !(storage_capacity >= container_capacity) {
        return Err(CerealValidationError::StorageCapacityTooSmall {
            storage: storage_capacity,
            container: container_capacity,
        });
    }

    Ok(())
}

/// Validate an amount of cereal passed to add or get
pub fn validate_amount(amount: f32) -> Result<(), CerealValidationError> {
    if !(amount >= 0.0) {
        return Err(CerealValidationError::InvalidAmount { value: amount });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_capacities_valid() {
        assert!(validate_capacities(10.0, 20.0).is_ok());
        assert!(validate_capacities(10.0, 10.0).is_ok());
        assert!(validate_capacities(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_validate_capacities_negative_container() {
        assert!(matches!(
            validate_capacities(-1.1, 10.0),
            Err(CerealValidationError::InvalidContainerCapacity { .. })
        ));
    }

    #[test]
    fn test_validate_capacities_storage_too_small() {
        assert!(matches!(
            validate_capacities(6.6, 3.3),
            Err(CerealValidationError::StorageCapacityTooSmall { .. })
        ));
    }

    #[test]
    fn test_validate_capacities_nan() {
        assert!(validate_capacities(f32::NAN, 10.0).is_err());
        assert!(validate_capacities(10.0, f32::NAN).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(5.5).is_ok());
        assert!(matches!(
            validate_amount(-1.1),
            Err(CerealValidationError::InvalidAmount { .. })
        ));
        assert!(validate_amount(f32::NAN).is_err());
        assert!(validate_amount(f32::NEG_INFINITY).is_err());
        assert!(validate_amount(f32::INFINITY).is_ok());
    }

    #[test]
    fn test_validation_error_into_domain_error() {
        let err: DomainError = CerealValidationError::InvalidAmount { value: -1.0 }.into();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Invalid argument: Cereal amount must be a non-negative number: -1"
        );
    }
}
