//! Plan comparison, drug pricing and the provider directory

use crate::pages::form_failure::FormFailure;
use crate::pages::page_session::PageSession;
use crate::{ApiError, ApiResult, AppState, DrugPriceDto, PlanListQuery};

use bfs_core::{DrugPriceFilter, PlanType, ProviderFilter, apply_filter, catalog};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlanPageQuery {
    pub name: Option<String>,
    pub plan_type: Option<String>,
    pub network: Option<String>,
    pub max_premium: Option<String>,
    pub drug: Option<String>,
}

#[derive(Debug, Serialize)]
struct PlanRow {
    name: &'static str,
    carrier: &'static str,
    plan_type: &'static str,
    premium: String,
    deductible: String,
    out_of_pocket_max: String,
    worst_case: String,
    network: &'static str,
    coverage: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct DrugPriceRow {
    drug_name: String,
    plan_name: String,
    carrier: String,
    tier: u8,
    monthly_cost: String,
    annual_cost: String,
}

impl PlanPageQuery {
    fn plan_query(&self) -> ApiResult<PlanListQuery> {
        let max_premium = match self.max_premium.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<f64>().map_err(|_| {
                ApiError::validation(Some("max_premium"), "max premium must be a number")
            })?),
        };

        Ok(PlanListQuery {
            name: self.name.clone(),
            plan_type: self.plan_type.clone(),
            network: self.network.clone(),
            max_premium,
        })
    }
}

/// GET /dashboard/plans
pub async fn plans(
    State(state): State<AppState>,
    session: PageSession,
    Query(query): Query<PlanPageQuery>,
) -> Response {
    let mut context = session.context("Compare plans");
    context.insert("plan_types", &PlanType::ALL.map(|t| t.as_str()));

    let filter = query.plan_query().and_then(PlanListQuery::into_filter);
    let filter = match filter {
        Ok(filter) => filter,
        Err(e) => {
            let failure = FormFailure::from(e);
            context.insert("form", &query);
            context.insert("plans", &Vec::<PlanRow>::new());
            context.insert("error", &failure.message);
            let response = state.renderer.page(failure.status, "plans.html", &context);
            return failure.attach(response);
        }
    };

    let plans: Vec<PlanRow> = apply_filter(catalog::plans(), &filter)
        .into_iter()
        .map(|plan| PlanRow {
            name: plan.name,
            carrier: plan.carrier,
            plan_type: plan.plan_type.as_str(),
            premium: session.money(plan.premium),
            deductible: session.money(plan.deductible),
            out_of_pocket_max: session.money(plan.out_of_pocket_max),
            worst_case: session.money(plan.worst_case_annual_cost()),
            network: plan.network,
            coverage: plan.coverage.clone(),
        })
        .collect();

    let drug = query.drug.as_deref().map(str::trim).unwrap_or_default();
    if !drug.is_empty() {
        let drug_filter = DrugPriceFilter {
            drug: Some(drug.to_string()),
            plan_id: None,
        };
        let prices: Vec<DrugPriceRow> = apply_filter(catalog::drug_prices(), &drug_filter)
            .into_iter()
            .map(DrugPriceDto::from)
            .map(|price| DrugPriceRow {
                drug_name: price.drug_name,
                plan_name: price.plan_name.unwrap_or_else(|| price.plan_id.clone()),
                carrier: price.carrier.unwrap_or_default(),
                tier: price.tier,
                monthly_cost: session.money(price.monthly_cost),
                annual_cost: session.money(price.annual_cost),
            })
            .collect();
        context.insert("prices", &prices);
    }

    context.insert("form", &query);
    context.insert("plans", &plans);
    state.renderer.page(StatusCode::OK, "plans.html", &context)
}

/// GET /dashboard/providers
pub async fn providers(
    State(state): State<AppState>,
    session: PageSession,
    Query(filter): Query<ProviderFilter>,
) -> Response {
    let mut context = session.context("Find a provider");
    let providers = apply_filter(catalog::providers(), &filter);
    context.insert("form", &filter);
    context.insert("providers", &providers);
    state.renderer.page(StatusCode::OK, "providers.html", &context)
}
