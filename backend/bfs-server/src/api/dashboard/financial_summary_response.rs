use bfs_core::FinancialSummary;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct FinancialSummaryResponse {
    pub summary: FinancialSummary,
}
