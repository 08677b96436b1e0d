//! Travel modes understood by the routing collaborator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the user intends to travel between stops.
///
/// The mode selects the routing profile queried on the external service and
/// participates in the cache key; the optimizer's distance metric is
/// mode-agnostic.
///
/// # Examples
/// ```
/// use wayfinder_core::TravelMode;
///
/// assert_eq!(TravelMode::Cycling.to_string(), "cycling");
/// assert_eq!("walking".parse(), Ok(TravelMode::Walking));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// Route for a car.
    #[default]
    Driving,
    /// Route for a bicycle.
    Cycling,
    /// Route on foot.
    Walking,
}

impl TravelMode {
    /// The routing-profile segment used in service URLs and cache keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Cycling => "cycling",
            Self::Walking => "walking",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown travel mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown travel mode `{input}`; expected driving, cycling, or walking")]
pub struct TravelModeParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for TravelMode {
    type Err = TravelModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driving" => Ok(Self::Driving),
            "cycling" => Ok(Self::Cycling),
            "walking" => Ok(Self::Walking),
            other => Err(TravelModeParseError {
                input: other.to_owned(),
            }),
        }
    }
}
