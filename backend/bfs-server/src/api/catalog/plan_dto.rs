use bfs_core::{InsurancePlan, PlanType};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDto {
    pub id: String,
    pub name: String,
    pub carrier: String,
    pub plan_type: PlanType,
    pub premium: f64,
    pub annual_premium: f64,
    pub deductible: f64,
    pub out_of_pocket_max: f64,
    pub worst_case_annual_cost: f64,
    pub network: String,
    pub coverage: Vec<String>,
}

impl From<&InsurancePlan> for PlanDto {
    fn from(plan: &InsurancePlan) -> Self {
        Self {
            id: plan.id.to_string(),
            name: plan.name.to_string(),
            carrier: plan.carrier.to_string(),
            plan_type: plan.plan_type,
            premium: plan.premium,
            annual_premium: plan.annual_premium(),
            deductible: plan.deductible,
            out_of_pocket_max: plan.out_of_pocket_max,
            worst_case_annual_cost: plan.worst_case_annual_cost(),
            network: plan.network.to_string(),
            coverage: plan.coverage.iter().map(|c| c.to_string()).collect(),
        }
    }
}
