//! Marketing pages and the contact form

use crate::AppState;
use crate::pages::form_failure::FormFailure;
use crate::pages::page_session::PageSession;

use bfs_core::PlanType;

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::Response,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// GET /
pub async fn home(State(state): State<AppState>, session: PageSession) -> Response {
    let mut context = session.context("Home");
    context.insert("plan_types", &PlanType::ALL.map(|t| t.as_str()));
    state.renderer.page(StatusCode::OK, "home.html", &context)
}

/// GET /services
pub async fn services(State(state): State<AppState>, session: PageSession) -> Response {
    let context = session.context("Services");
    state.renderer.page(StatusCode::OK, "services.html", &context)
}

/// GET /about
pub async fn about(State(state): State<AppState>, session: PageSession) -> Response {
    let context = session.context("About");
    state.renderer.page(StatusCode::OK, "about.html", &context)
}

/// GET /contact
pub async fn contact(State(state): State<AppState>, session: PageSession) -> Response {
    let mut context = session.context("Contact");
    context.insert("form", &ContactForm::default());
    context.insert("sent", &false);
    state.renderer.page(StatusCode::OK, "contact.html", &context)
}

/// POST /contact
pub async fn submit_contact(
    State(state): State<AppState>,
    session: PageSession,
    Form(form): Form<ContactForm>,
) -> Response {
    let mut context = session.context("Contact");

    match state
        .contact
        .submit(&form.name, &form.email, &form.message)
        .await
    {
        Ok(_) => {
            context.insert("form", &ContactForm::default());
            context.insert("sent", &true);
            state.renderer.page(StatusCode::OK, "contact.html", &context)
        }
        Err(e) => {
            let failure = FormFailure::from(e);
            context.insert("form", &form);
            context.insert("sent", &false);
            context.insert("error", &failure.message);
            let response = state
                .renderer
                .page(failure.status, "contact.html", &context);
            failure.attach(response)
        }
    }
}

/// GET /unauthorized
pub async fn unauthorized(State(state): State<AppState>, session: PageSession) -> Response {
    let context = session.context("Access denied");
    state
        .renderer
        .page(StatusCode::FORBIDDEN, "unauthorized.html", &context)
}
