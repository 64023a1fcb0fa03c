//! `/dashboard/calculators`: the calculator forms submit by GET, so a
//! result page is a bookmarkable URL.

use crate::pages::form_failure::FormFailure;
use crate::pages::page_session::PageSession;
use crate::{ApiError, ApiResult, AppState};

use bfs_core::{
    InvestmentInput, LifeInsuranceInput, MortgageInput, life_insurance_needs, mortgage_payment,
    project_investment,
};

use std::str::FromStr;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use serde::{Deserialize, Serialize};

/// Raw form values; everything stays text until the chosen calculator
/// parses what it needs.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CalculatorQuery {
    pub calculator: Option<String>,
    // mortgage
    pub principal: Option<String>,
    pub annual_rate: Option<String>,
    pub term_years: Option<String>,
    // investment
    pub initial_amount: Option<String>,
    pub annual_contribution: Option<String>,
    pub annual_return: Option<String>,
    pub years: Option<String>,
    // life insurance
    pub debts: Option<String>,
    pub annual_income: Option<String>,
    pub income_years: Option<String>,
    pub mortgage_balance: Option<String>,
    pub education_costs: Option<String>,
    pub existing_coverage: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ScheduleRow {
    pub year: u32,
    pub contributions: String,
    pub balance: String,
}

#[derive(Debug, Serialize)]
pub struct CalculatorResult {
    pub calculator: &'static str,
    pub rows: Vec<ResultRow>,
    pub schedule: Vec<ScheduleRow>,
}

/// GET /dashboard/calculators
pub async fn calculators(
    State(state): State<AppState>,
    session: PageSession,
    Query(query): Query<CalculatorQuery>,
) -> Response {
    let mut context = session.context("Calculators");
    let outcome = calculate(&query, &session);
    context.insert("form", &query);

    match outcome {
        Ok(result) => {
            context.insert("result", &result);
            state
                .renderer
                .page(StatusCode::OK, "calculators.html", &context)
        }
        Err(e) => {
            let failure = FormFailure::from(e);
            context.insert("error", &failure.message);
            let response = state
                .renderer
                .page(failure.status, "calculators.html", &context);
            failure.attach(response)
        }
    }
}

/// Run the selected calculator; `None` when no calculator was submitted.
pub fn calculate(
    query: &CalculatorQuery,
    session: &PageSession,
) -> ApiResult<Option<CalculatorResult>> {
    let selected = query.calculator.as_deref().map(str::trim);
    let result = match selected {
        None | Some("") => return Ok(None),
        Some("mortgage") => {
            let quote = mortgage_payment(&MortgageInput {
                principal: number("principal", query.principal.as_deref(), None)?,
                annual_rate: number("annual_rate", query.annual_rate.as_deref(), None)?,
                term_years: number("term_years", query.term_years.as_deref(), None)?,
            })?;
            CalculatorResult {
                calculator: "mortgage",
                rows: vec![
                    row("Monthly payment", session.money(quote.monthly_payment)),
                    row("Total paid", session.money(quote.total_paid)),
                    row("Total interest", session.money(quote.total_interest)),
                    row("Payments", quote.payments.to_string()),
                ],
                schedule: Vec::new(),
            }
        }
        Some("investment") => {
            let projection = project_investment(&InvestmentInput {
                initial_amount: number("initial_amount", query.initial_amount.as_deref(), Some(0.0))?,
                annual_contribution: number(
                    "annual_contribution",
                    query.annual_contribution.as_deref(),
                    Some(0.0),
                )?,
                annual_return: number("annual_return", query.annual_return.as_deref(), None)?,
                years: number("years", query.years.as_deref(), None)?,
            })?;
            CalculatorResult {
                calculator: "investment",
                rows: vec![
                    row("Final value", session.money(projection.final_value)),
                    row(
                        "Total contributions",
                        session.money(projection.total_contributions),
                    ),
                    row("Total growth", session.money(projection.total_growth)),
                ],
                schedule: projection
                    .schedule
                    .iter()
                    .map(|year| ScheduleRow {
                        year: year.year,
                        contributions: session.money(year.contributions),
                        balance: session.money(year.balance),
                    })
                    .collect(),
            }
        }
        Some("life-insurance") => {
            let needs = life_insurance_needs(&LifeInsuranceInput {
                debts: number("debts", query.debts.as_deref(), Some(0.0))?,
                annual_income: number("annual_income", query.annual_income.as_deref(), None)?,
                income_years: number("income_years", query.income_years.as_deref(), None)?,
                mortgage_balance: number(
                    "mortgage_balance",
                    query.mortgage_balance.as_deref(),
                    Some(0.0),
                )?,
                education_costs: number(
                    "education_costs",
                    query.education_costs.as_deref(),
                    Some(0.0),
                )?,
                existing_coverage: number(
                    "existing_coverage",
                    query.existing_coverage.as_deref(),
                    Some(0.0),
                )?,
            })?;
            CalculatorResult {
                calculator: "life-insurance",
                rows: vec![
                    row("Total need", session.money(needs.total_need)),
                    row("Existing coverage", session.money(needs.existing_coverage)),
                    row("Coverage gap", session.money(needs.coverage_gap)),
                ],
                schedule: Vec::new(),
            }
        }
        Some(other) => {
            return Err(ApiError::validation(
                Some("calculator"),
                format!("Unknown calculator '{other}'"),
            ));
        }
    };

    Ok(Some(result))
}

fn row(label: &'static str, value: String) -> ResultRow {
    ResultRow { label, value }
}

/// Parse a form field; blank uses `default`, or is an error without one.
#[track_caller]
fn number<T: FromStr>(field: &'static str, raw: Option<&str>, default: Option<T>) -> ApiResult<T> {
    let label = field.replace('_', " ");
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => default.ok_or_else(|| {
            ApiError::validation(Some(field), format!("Enter a value for {label}"))
        }),
        Some(value) => value.replace(',', "").parse::<T>().map_err(|_| {
            ApiError::validation(Some(field), format!("{label} must be a number"))
        }),
    }
}
