use crate::validation::require_non_negative;
use crate::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};

pub const MAX_INCOME_YEARS: u32 = 50;

/// Inputs for a DIME (debt, income, mortgage, education) needs estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeInsuranceInput {
    #[serde(default)]
    pub debts: f64,
    pub annual_income: f64,
    pub income_years: u32,
    #[serde(default)]
    pub mortgage_balance: f64,
    #[serde(default)]
    pub education_costs: f64,
    #[serde(default)]
    pub existing_coverage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeInsuranceNeeds {
    pub total_need: f64,
    pub existing_coverage: f64,
    /// Additional coverage to buy; never negative
    pub coverage_gap: f64,
}

#[track_caller]
pub fn life_insurance_needs(input: &LifeInsuranceInput) -> CoreResult<LifeInsuranceNeeds> {
    let debts = require_non_negative("debts", input.debts)?;
    let income = require_non_negative("annual_income", input.annual_income)?;
    let mortgage = require_non_negative("mortgage_balance", input.mortgage_balance)?;
    let education = require_non_negative("education_costs", input.education_costs)?;
    let existing = require_non_negative("existing_coverage", input.existing_coverage)?;
    if input.income_years > MAX_INCOME_YEARS {
        return Err(CoreError::validation(
            "income_years",
            format!("Income years must be at most {MAX_INCOME_YEARS}"),
        ));
    }

    let total_need = debts + income * input.income_years as f64 + mortgage + education;

    Ok(LifeInsuranceNeeds {
        total_need,
        existing_coverage: existing,
        coverage_gap: (total_need - existing).max(0.0),
    })
}
