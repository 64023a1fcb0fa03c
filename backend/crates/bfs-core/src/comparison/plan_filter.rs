use crate::comparison::{Filter, text_matches};
use crate::{InsurancePlan, PlanType};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanFilter {
    pub name: Option<String>,
    pub plan_type: Option<PlanType>,
    pub network: Option<String>,
    /// Upper bound on the monthly premium
    pub max_premium: Option<f64>,
}

impl Filter<InsurancePlan> for PlanFilter {
    fn matches(&self, plan: &InsurancePlan) -> bool {
        text_matches(self.name.as_deref(), plan.name)
            && text_matches(self.network.as_deref(), plan.network)
            && self.plan_type.is_none_or(|t| t == plan.plan_type)
            && self.max_premium.is_none_or(|max| plan.premium <= max)
    }
}
