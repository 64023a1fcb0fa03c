use crate::Metrics;
use crate::pages::page_session::PageSession;
use crate::pages::renderer::{FALLBACK_PAGE, PageRenderer};

use http::StatusCode;
use http_body_util::BodyExt;
use tera::Context;

async fn body_text(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn given_bundled_templates_when_home_rendered_then_ok_with_site_name() {
    // Given
    let renderer = PageRenderer::new(Metrics::new()).unwrap();
    let mut context = PageSession::default().context("Home");
    context.insert("plan_types", &["health", "life"]);

    // When
    let response = renderer.page(StatusCode::OK, "home.html", &context);

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Buckalew Financial Services"));
    assert!(html.contains("theme-system"));
}

#[tokio::test]
async fn given_template_missing_variable_when_rendered_then_fallback_with_500() {
    // Given
    let renderer =
        PageRenderer::with_templates([("broken.html", "<p>{{ missing.value }}</p>")], Metrics::new())
            .unwrap();

    // When
    let response = renderer.page(StatusCode::OK, "broken.html", &Context::new());

    // Then
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, FALLBACK_PAGE);
}

#[tokio::test]
async fn given_unknown_template_when_rendered_then_fallback_with_500() {
    // Given
    let renderer = PageRenderer::new(Metrics::new()).unwrap();

    // When
    let response = renderer.page(StatusCode::OK, "nope.html", &Context::new());

    // Then
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn given_template_syntax_error_when_loaded_then_error() {
    // Given / When
    let result = PageRenderer::with_templates([("bad.html", "{% if %}")], Metrics::new());

    // Then
    assert!(result.is_err());
}
