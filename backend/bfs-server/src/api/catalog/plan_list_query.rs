use crate::ApiResult;

use bfs_core::{PlanFilter, PlanType};

use serde::Deserialize;

/// Query string of `GET /api/plans`
#[derive(Debug, Default, Deserialize)]
pub struct PlanListQuery {
    pub name: Option<String>,
    pub plan_type: Option<String>,
    pub network: Option<String>,
    pub max_premium: Option<f64>,
}

impl PlanListQuery {
    /// Blank `plan_type` means any type; an unknown one is a validation error
    pub fn into_filter(self) -> ApiResult<PlanFilter> {
        let plan_type = match self.plan_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.to_lowercase().parse::<PlanType>()?),
        };

        Ok(PlanFilter {
            name: self.name,
            plan_type,
            network: self.network,
            max_premium: self.max_premium,
        })
    }
}
