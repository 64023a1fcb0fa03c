use crate::DrugPrice;
use crate::comparison::{Filter, text_matches};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugPriceFilter {
    pub drug: Option<String>,
    pub plan_id: Option<String>,
}

impl Filter<DrugPrice> for DrugPriceFilter {
    fn matches(&self, price: &DrugPrice) -> bool {
        text_matches(self.drug.as_deref(), price.drug_name)
            && self
                .plan_id
                .as_deref()
                .map(str::trim)
                .is_none_or(|id| id.is_empty() || id == price.plan_id)
    }
}
