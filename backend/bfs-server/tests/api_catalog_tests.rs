mod common;

use common::{body_json, create_test_app_state, get, json_request, send};

use axum::http::StatusCode;
use bfs_server::build_router;
use serde_json::json;

#[tokio::test]
async fn given_no_filter_when_listing_plans_then_returns_catalog_in_order() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(&app, get("/api/plans")).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let plans = body["plans"].as_array().unwrap();
    assert_eq!(plans.len(), 8);
    assert_eq!(plans[0]["id"], "bcbs-ppo-gold");
    assert_eq!(plans[0]["annual_premium"], 485.0 * 12.0);
}

#[tokio::test]
async fn given_plan_type_filter_when_listing_plans_then_returns_matching_type() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(&app, get("/api/plans?plan_type=Health")).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let ids: Vec<&str> = body["plans"]
        .as_array()
        .unwrap()
        .iter()
        .map(|plan| plan["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["bcbs-ppo-gold", "aetna-hmo-silver"]);
}

#[tokio::test]
async fn given_name_filter_when_listing_plans_then_matches_case_insensitively() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(&app, get("/api/plans?name=delta")).await;

    // Then
    let body = body_json(response).await;
    let plans = body["plans"].as_array().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0]["name"], "Delta Dental PPO");
}

#[tokio::test]
async fn given_unknown_plan_type_when_listing_plans_then_returns_bad_request() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(&app, get("/api/plans?plan_type=pet")).await;

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn given_non_numeric_premium_when_listing_plans_then_returns_bad_request() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(&app, get("/api/plans?max_premium=cheap")).await;

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_network_filter_when_listing_providers_then_returns_network_members() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(&app, get("/api/providers?network=hmo")).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let providers = body["providers"].as_array().unwrap();
    assert_eq!(providers.len(), 3);
    assert!(providers.iter().all(|p| p["network"] == "HMO"));
}

#[tokio::test]
async fn given_drug_filter_when_listing_prices_then_joins_plan_names() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(&app, get("/api/drug-prices?drug=atorvastatin")).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let prices = body["prices"].as_array().unwrap();
    assert_eq!(prices.len(), 3);
    assert_eq!(prices[0]["plan_name"], "Blue Cross PPO Gold");
}

#[tokio::test]
async fn given_valid_loan_when_quoting_mortgage_then_returns_monthly_payment() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(
        &app,
        json_request(
            "POST",
            "/api/calculators/mortgage",
            json!({"principal": 300000.0, "annual_rate": 6.0, "term_years": 30}),
        ),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let payment = body["monthly_payment"].as_f64().unwrap();
    assert!((payment - 1798.65).abs() < 0.01);
    assert_eq!(body["payments"], 360);
}

#[tokio::test]
async fn given_zero_term_when_quoting_mortgage_then_returns_field_error() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(
        &app,
        json_request(
            "POST",
            "/api/calculators/mortgage",
            json!({"principal": 300000.0, "annual_rate": 6.0, "term_years": 0}),
        ),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "term_years");
}

#[tokio::test]
async fn given_malformed_json_when_calculating_then_returns_bad_request() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(
        &app,
        json_request(
            "POST",
            "/api/calculators/investment",
            json!({"initial_amount": "lots"}),
        ),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn given_household_needs_when_estimating_life_insurance_then_returns_gap() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(
        &app,
        json_request(
            "POST",
            "/api/calculators/life-insurance",
            json!({
                "debts": 10000.0,
                "annual_income": 50000.0,
                "income_years": 10,
                "mortgage_balance": 200000.0,
                "education_costs": 50000.0,
                "existing_coverage": 100000.0,
            }),
        ),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total_need"], 760000.0);
    assert_eq!(body["coverage_gap"], 660000.0);
}
