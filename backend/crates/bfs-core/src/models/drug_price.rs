use serde::Serialize;

/// Monthly cost of a drug under one plan's formulary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrugPrice {
    pub drug_name: &'static str,
    pub plan_id: &'static str,
    pub tier: u8,
    pub monthly_cost: f64,
}

impl DrugPrice {
    pub fn annual_cost(&self) -> f64 {
        self.monthly_cost * 12.0
    }
}
