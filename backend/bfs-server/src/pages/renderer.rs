//! Server-side page rendering with tera.
//!
//! Templates are compiled into the binary. A template that fails to render
//! yields [`FALLBACK_PAGE`] with status 500 instead of a partial page.

use crate::Metrics;
use crate::error::Result as ServerErrorResult;

use std::error::Error as _;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::error;
use tera::{Context, Tera};

const TEMPLATES: [(&str, &str); 16] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("services.html", include_str!("../../templates/services.html")),
    ("about.html", include_str!("../../templates/about.html")),
    ("contact.html", include_str!("../../templates/contact.html")),
    ("login.html", include_str!("../../templates/login.html")),
    ("register.html", include_str!("../../templates/register.html")),
    ("dashboard.html", include_str!("../../templates/dashboard.html")),
    ("settings.html", include_str!("../../templates/settings.html")),
    ("calculators.html", include_str!("../../templates/calculators.html")),
    ("plans.html", include_str!("../../templates/plans.html")),
    ("providers.html", include_str!("../../templates/providers.html")),
    ("admin.html", include_str!("../../templates/admin.html")),
    ("clients.html", include_str!("../../templates/clients.html")),
    ("unauthorized.html", include_str!("../../templates/unauthorized.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
];

pub const FALLBACK_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Buckalew Financial Services</title></head>
<body>
<h1>Something went wrong</h1>
<p>We could not display this page. Please try again later.</p>
<p><a href="/">Return home</a></p>
</body>
</html>
"#;

pub struct PageRenderer {
    tera: Tera,
    metrics: Metrics,
}

impl PageRenderer {
    pub fn new(metrics: Metrics) -> ServerErrorResult<Self> {
        Self::with_templates(TEMPLATES, metrics)
    }

    pub fn with_templates<I, N, C>(templates: I, metrics: Metrics) -> ServerErrorResult<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)?;
        Ok(Self { tera, metrics })
    }

    pub fn render(&self, name: &str, context: &Context) -> tera::Result<String> {
        self.tera.render(name, context)
    }

    /// Render `name` with `status`, or the fallback page with 500.
    pub fn page(&self, status: StatusCode, name: &str, context: &Context) -> Response {
        match self.render(name, context) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                error!("Failed to render {}: {}", name, describe(&e));
                self.metrics.page_render_failed();
                (StatusCode::INTERNAL_SERVER_ERROR, Html(FALLBACK_PAGE)).into_response()
            }
        }
    }
}

/// Tera reports the useful part of an error in its source chain
fn describe(e: &tera::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
