use bfs_core::{DrugPrice, catalog};

use serde::{Deserialize, Serialize};

/// A drug price joined to the plan it belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugPriceDto {
    pub drug_name: String,
    pub plan_id: String,
    pub plan_name: Option<String>,
    pub carrier: Option<String>,
    pub tier: u8,
    pub monthly_cost: f64,
    pub annual_cost: f64,
}

impl From<&DrugPrice> for DrugPriceDto {
    fn from(price: &DrugPrice) -> Self {
        let plan = catalog::find_plan(price.plan_id);
        Self {
            drug_name: price.drug_name.to_string(),
            plan_id: price.plan_id.to_string(),
            plan_name: plan.map(|p| p.name.to_string()),
            carrier: plan.map(|p| p.carrier.to_string()),
            tier: price.tier,
            monthly_cost: price.monthly_cost,
            annual_cost: price.annual_cost(),
        }
    }
}
