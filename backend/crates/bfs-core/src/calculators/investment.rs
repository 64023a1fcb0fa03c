use crate::validation::{require_non_negative, require_positive};
use crate::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};

pub const MAX_YEARS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    pub initial_amount: f64,
    /// Deposited at the end of every year
    #[serde(default)]
    pub annual_contribution: f64,
    /// Expected annual return in percent (8.0 = 8%)
    pub annual_return: f64,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearBalance {
    pub year: u32,
    pub contributions: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    pub final_value: f64,
    pub total_contributions: f64,
    pub total_growth: f64,
    pub schedule: Vec<YearBalance>,
}

/// Future value with annual compounding and end-of-year contributions:
/// `P(1+r)^n + C((1+r)^n − 1)/r`
#[track_caller]
pub fn project_investment(input: &InvestmentInput) -> CoreResult<InvestmentProjection> {
    let initial = require_non_negative("initial_amount", input.initial_amount)?;
    let contribution = require_non_negative("annual_contribution", input.annual_contribution)?;
    let annual_return = require_positive("annual_return", input.annual_return)?;
    if initial == 0.0 && contribution == 0.0 {
        return Err(CoreError::validation(
            "initial_amount",
            "Enter an initial amount or an annual contribution",
        ));
    }
    if input.years == 0 || input.years > MAX_YEARS {
        return Err(CoreError::validation(
            "years",
            format!("Years must be between 1 and {MAX_YEARS}"),
        ));
    }

    let rate = annual_return / 100.0;
    // (1+r)^n - 1 without cancellation for tiny rates
    let growth_minus_one = (input.years as f64 * rate.ln_1p()).exp_m1();
    let final_value =
        initial * (1.0 + growth_minus_one) + contribution * (growth_minus_one / rate);
    if !final_value.is_finite() {
        return Err(CoreError::validation(
            "initial_amount",
            "Projection cannot be calculated from these values",
        ));
    }

    let mut schedule = Vec::with_capacity(input.years as usize);
    let mut balance = initial;
    for year in 1..=input.years {
        balance = balance * (1.0 + rate) + contribution;
        schedule.push(YearBalance {
            year,
            contributions: initial + contribution * year as f64,
            balance,
        });
    }

    let total_contributions = initial + contribution * input.years as f64;

    Ok(InvestmentProjection {
        final_value,
        total_contributions,
        total_growth: final_value - total_contributions,
        schedule,
    })
}
