use crate::Investment;

use serde::{Deserialize, Serialize};

/// Portfolio totals shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_invested: f64,
    pub current_value: f64,
    pub total_gain: f64,
    /// Gain relative to the amount invested, in percent (0 when nothing invested)
    pub gain_percent: f64,
    pub holdings: usize,
    pub allocation: Vec<AssetAllocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetAllocation {
    pub asset_class: String,
    pub current_value: f64,
    /// Share of the portfolio's current value, in percent
    pub share_percent: f64,
}

impl FinancialSummary {
    /// Aggregate holdings; allocation keeps the order in which each asset
    /// class first appears.
    pub fn from_investments(investments: &[Investment]) -> Self {
        let total_invested: f64 = investments.iter().map(|i| i.amount_invested).sum();
        let current_value: f64 = investments.iter().map(|i| i.current_value).sum();
        let total_gain = current_value - total_invested;
        let gain_percent = if total_invested > 0.0 {
            total_gain / total_invested * 100.0
        } else {
            0.0
        };

        let mut allocation: Vec<AssetAllocation> = Vec::new();
        for investment in investments {
            match allocation
                .iter_mut()
                .find(|a| a.asset_class == investment.asset_class)
            {
                Some(existing) => existing.current_value += investment.current_value,
                None => allocation.push(AssetAllocation {
                    asset_class: investment.asset_class.clone(),
                    current_value: investment.current_value,
                    share_percent: 0.0,
                }),
            }
        }
        for entry in &mut allocation {
            entry.share_percent = if current_value > 0.0 {
                entry.current_value / current_value * 100.0
            } else {
                0.0
            };
        }

        Self {
            total_invested,
            current_value,
            total_gain,
            gain_percent,
            holdings: investments.len(),
            allocation,
        }
    }
}
