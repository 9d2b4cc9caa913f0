//! Logical datasets — the named service collections tracked by the cache.

use serde::{Deserialize, Serialize};

use crate::service::ServiceType;

/// Logical dataset key.
///
/// The two collections are cached and reloaded independently and are never
/// merged, so item ids only need to be unique within one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    /// Outpatient and inpatient services.
    #[serde(rename = "ambulatory")]
    AmbulatoryStationary,
    /// Laboratory services.
    Laboratory,
}

impl Dataset {
    /// Every logical dataset, in display order.
    pub const ALL: [Self; 2] = [Self::AmbulatoryStationary, Self::Laboratory];

    /// The fixed type discriminator stamped on items of this dataset.
    #[must_use]
    pub fn service_type(self) -> ServiceType {
        match self {
            Self::AmbulatoryStationary => ServiceType::OutpatientInpatient,
            Self::Laboratory => ServiceType::Laboratory,
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmbulatoryStationary => f.write_str("ambulatory"),
            Self::Laboratory => f.write_str("laboratory"),
        }
    }
}

/// Error returned when parsing an unknown dataset name.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown dataset `{0}` (expected `ambulatory` or `laboratory`)")]
pub struct ParseDatasetError(pub String);

impl std::str::FromStr for Dataset {
    type Err = ParseDatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ambulatory" => Ok(Self::AmbulatoryStationary),
            "laboratory" => Ok(Self::Laboratory),
            other => Err(ParseDatasetError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_map_dataset_to_its_service_type() {
        assert_eq!(
            Dataset::AmbulatoryStationary.service_type(),
            ServiceType::OutpatientInpatient
        );
        assert_eq!(Dataset::Laboratory.service_type(), ServiceType::Laboratory);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        for dataset in Dataset::ALL {
            let parsed: Dataset = dataset.to_string().parse().unwrap();
            assert_eq!(parsed, dataset);
        }
    }

    #[test]
    fn should_return_error_when_parsing_unknown_name() {
        let result = Dataset::from_str("radiology");
        assert_eq!(result, Err(ParseDatasetError("radiology".to_string())));
    }

    #[test]
    fn should_serialize_to_lowercase_name() {
        let json = serde_json::to_string(&Dataset::AmbulatoryStationary).unwrap();
        assert_eq!(json, "\"ambulatory\"");
        let json = serde_json::to_string(&Dataset::Laboratory).unwrap();
        assert_eq!(json, "\"laboratory\"");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        for dataset in Dataset::ALL {
            let json = serde_json::to_string(&dataset).unwrap();
            let parsed: Dataset = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, dataset);
        }
    }
}
