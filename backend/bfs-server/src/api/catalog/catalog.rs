//! Catalog REST API handlers
//!
//! Public, read-only views over the static plan, provider and drug-price
//! tables. Results keep catalog order.

use crate::api::extractors::query_params::QueryParams;
use crate::{
    ApiResult, DrugPriceDto, DrugPriceListResponse, PlanDto, PlanListQuery, PlanListResponse,
    ProviderDto, ProviderListResponse,
};

use bfs_core::{DrugPriceFilter, ProviderFilter, apply_filter, catalog};

use axum::Json;

/// GET /api/plans?name=&plan_type=&network=&max_premium=
pub async fn list_plans(
    QueryParams(query): QueryParams<PlanListQuery>,
) -> ApiResult<Json<PlanListResponse>> {
    let filter = query.into_filter()?;
    let plans = apply_filter(catalog::plans(), &filter)
        .into_iter()
        .map(PlanDto::from)
        .collect();

    Ok(Json(PlanListResponse { plans }))
}

/// GET /api/providers?name=&specialty=&location=&network=
pub async fn list_providers(
    QueryParams(filter): QueryParams<ProviderFilter>,
) -> Json<ProviderListResponse> {
    let providers = apply_filter(catalog::providers(), &filter)
        .into_iter()
        .map(ProviderDto::from)
        .collect();

    Json(ProviderListResponse { providers })
}

/// GET /api/drug-prices?drug=&plan_id=
pub async fn list_drug_prices(
    QueryParams(filter): QueryParams<DrugPriceFilter>,
) -> Json<DrugPriceListResponse> {
    let prices = apply_filter(catalog::drug_prices(), &filter)
        .into_iter()
        .map(DrugPriceDto::from)
        .collect();

    Json(DrugPriceListResponse { prices })
}
