//! Calculator REST API handlers
//!
//! Stateless and public: the body is the calculator input, the response
//! its result. Invalid input is a 400 naming the offending field.

use crate::ApiResult;
use crate::api::extractors::json_body::JsonBody;

use bfs_core::{
    InvestmentInput, InvestmentProjection, LifeInsuranceInput, LifeInsuranceNeeds, MortgageInput,
    MortgageQuote, life_insurance_needs, mortgage_payment, project_investment,
};

use axum::Json;

/// POST /api/calculators/mortgage
pub async fn mortgage(JsonBody(input): JsonBody<MortgageInput>) -> ApiResult<Json<MortgageQuote>> {
    Ok(Json(mortgage_payment(&input)?))
}

/// POST /api/calculators/investment
pub async fn investment(
    JsonBody(input): JsonBody<InvestmentInput>,
) -> ApiResult<Json<InvestmentProjection>> {
    Ok(Json(project_investment(&input)?))
}

/// POST /api/calculators/life-insurance
pub async fn life_insurance(
    JsonBody(input): JsonBody<LifeInsuranceInput>,
) -> ApiResult<Json<LifeInsuranceNeeds>> {
    Ok(Json(life_insurance_needs(&input)?))
}
