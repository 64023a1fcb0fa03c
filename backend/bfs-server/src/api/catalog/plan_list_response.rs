use crate::PlanDto;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanListResponse {
    pub plans: Vec<PlanDto>,
}
