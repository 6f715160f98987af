//! Supported cereal kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::CerealValidationError;

/// Closed set of cereals a storage can keep, one container per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cereal {
    Buckwheat,
    Bulgur,
    Millet,
    Peas,
    Rice,
}

impl Cereal {
    /// Every supported cereal, in declaration order
    pub const ALL: [Cereal; 5] = [
        Cereal::Buckwheat,
        Cereal::Bulgur,
        Cereal::Millet,
        Cereal::Peas,
        Cereal::Rice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buckwheat => "BUCKWHEAT",
            Self::Bulgur => "BULGUR",
            Self::Millet => "MILLET",
            Self::Peas => "PEAS",
            Self::Rice => "RICE",
        }
    }
}

impl fmt::Display for Cereal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cereal {
    type Err = CerealValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cereal| cereal.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CerealValidationError::UnknownCereal {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cereal_display() {
        assert_eq!(Cereal::Rice.to_string(), "RICE");
        assert_eq!(Cereal::Buckwheat.to_string(), "BUCKWHEAT");
    }

    #[test]
    fn test_cereal_from_str() {
        assert_eq!("peas".parse::<Cereal>().unwrap(), Cereal::Peas);
        assert_eq!(" Millet ".parse::<Cereal>().unwrap(), Cereal::Millet);
        assert!(matches!(
            "oats".parse::<Cereal>(),
            Err(CerealValidationError::UnknownCereal { .. })
        ));
    }

    #[test]
    fn test_cereal_all_is_sorted_and_unique() {
        let mut sorted = Cereal::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, Cereal::ALL.to_vec());
    }

    #[test]
    fn test_cereal_serde() {
        let json = serde_json::to_string(&Cereal::Bulgur).unwrap();
        assert_eq!(json, "\"BULGUR\"");

        let parsed: Cereal = serde_json::from_str("\"RICE\"").unwrap();
        assert_eq!(parsed, Cereal::Rice);
    }
}
