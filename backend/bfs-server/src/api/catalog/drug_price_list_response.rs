use crate::DrugPriceDto;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct DrugPriceListResponse {
    pub prices: Vec<DrugPriceDto>,
}
