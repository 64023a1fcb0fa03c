use crate::PlanType;

use serde::Serialize;

/// Insurance product offered through the brokerage (static catalog data)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsurancePlan {
    pub id: &'static str,
    pub name: &'static str,
    pub carrier: &'static str,
    pub plan_type: PlanType,
    /// Monthly premium
    pub premium: f64,
    pub deductible: f64,
    pub out_of_pocket_max: f64,
    pub network: &'static str,
    pub coverage: Vec<&'static str>,
}

impl InsurancePlan {
    pub fn annual_premium(&self) -> f64 {
        self.premium * 12.0
    }

    /// Worst-case yearly spend: premiums plus the out-of-pocket ceiling
    pub fn worst_case_annual_cost(&self) -> f64 {
        self.annual_premium() + self.out_of_pocket_max
    }
}
