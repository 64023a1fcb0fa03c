use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Insurance product line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    Health,
    Medicare,
    Life,
    Dental,
    Vision,
    Disability,
}

impl PlanType {
    pub const ALL: [PlanType; 6] = [
        Self::Health,
        Self::Medicare,
        Self::Life,
        Self::Dental,
        Self::Vision,
        Self::Disability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Medicare => "medicare",
            Self::Life => "life",
            Self::Dental => "dental",
            Self::Vision => "vision",
            Self::Disability => "disability",
        }
    }
}

impl FromStr for PlanType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let location = ErrorLocation::from(Location::caller());
        Self::ALL
            .into_iter()
            .find(|plan_type| plan_type.as_str() == s)
            .ok_or_else(|| CoreError::InvalidPlanType {
                value: s.to_string(),
                location,
            })
    }
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
