use crate::validation::require_positive;
use crate::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};

pub const MAX_TERM_YEARS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageInput {
    pub principal: f64,
    /// Nominal annual interest rate in percent (6.0 = 6%)
    pub annual_rate: f64,
    pub term_years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageQuote {
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub payments: u32,
}

/// Fixed-rate amortized monthly payment: `P·r(1+r)^n / ((1+r)^n − 1)`
#[track_caller]
pub fn mortgage_payment(input: &MortgageInput) -> CoreResult<MortgageQuote> {
    let principal = require_positive("principal", input.principal)?;
    let annual_rate = require_positive("annual_rate", input.annual_rate)?;
    if input.term_years == 0 || input.term_years > MAX_TERM_YEARS {
        return Err(CoreError::validation(
            "term_years",
            format!("Term must be between 1 and {MAX_TERM_YEARS} years"),
        ));
    }

    let monthly_rate = annual_rate / 100.0 / 12.0;
    let payments = input.term_years * 12;
    // (1+r)^n - 1 without cancellation for tiny rates
    let growth_minus_one = (payments as f64 * monthly_rate.ln_1p()).exp_m1();
    let monthly_payment =
        principal * monthly_rate * (1.0 + growth_minus_one) / growth_minus_one;
    let total_paid = monthly_payment * payments as f64;
    if !monthly_payment.is_finite() || !total_paid.is_finite() || monthly_payment <= 0.0 {
        return Err(CoreError::validation(
            "principal",
            "Loan cannot be calculated from these values",
        ));
    }

    Ok(MortgageQuote {
        monthly_payment,
        total_paid,
        total_interest: total_paid - principal,
        payments,
    })
}
