//! Sign-in, registration and sign-out forms

use crate::AppState;
use crate::api::cookies::{self, REFRESH_COOKIE};
use crate::pages::form_failure::FormFailure;
use crate::pages::page_session::PageSession;

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use log::warn;
use serde::{Deserialize, Serialize};

const AFTER_LOGIN: &str = "/dashboard";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
}

/// GET /login
pub async fn login_page(State(state): State<AppState>, session: PageSession) -> Response {
    if session.is_signed_in() {
        return Redirect::to(AFTER_LOGIN).into_response();
    }

    let mut context = session.context("Sign in");
    context.insert("form", &LoginForm::default());
    state.renderer.page(StatusCode::OK, "login.html", &context)
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    session: PageSession,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.auth.login(&form.email, &form.password).await {
        Ok(outcome) => {
            let headers = state
                .cookies
                .login_headers(&outcome.access.token, &outcome.refresh_token);
            (headers, Redirect::to(AFTER_LOGIN)).into_response()
        }
        Err(e) => {
            let failure = FormFailure::from(e);
            let mut context = session.context("Sign in");
            context.insert("form", &form);
            context.insert("error", &failure.message);
            let response = state.renderer.page(failure.status, "login.html", &context);
            failure.attach(response)
        }
    }
}

/// GET /register
pub async fn register_page(State(state): State<AppState>, session: PageSession) -> Response {
    if session.is_signed_in() {
        return Redirect::to(AFTER_LOGIN).into_response();
    }

    let mut context = session.context("Create an account");
    context.insert("form", &RegisterForm::default());
    state.renderer.page(StatusCode::OK, "register.html", &context)
}

/// POST /register
///
/// Creates the account and signs the new user in
pub async fn register(
    State(state): State<AppState>,
    session: PageSession,
    Form(form): Form<RegisterForm>,
) -> Response {
    let registered = async {
        state
            .auth
            .register(&form.email, &form.password, &form.name)
            .await?;
        state.auth.login(&form.email, &form.password).await
    }
    .await;

    match registered {
        Ok(outcome) => {
            let headers = state
                .cookies
                .login_headers(&outcome.access.token, &outcome.refresh_token);
            (headers, Redirect::to(AFTER_LOGIN)).into_response()
        }
        Err(e) => {
            let failure = FormFailure::from(e);
            let mut context = session.context("Create an account");
            context.insert("form", &form);
            context.insert("error", &failure.message);
            let response = state
                .renderer
                .page(failure.status, "register.html", &context);
            failure.attach(response)
        }
    }
}

/// POST /logout
///
/// Always clears the cookies and returns to the home page
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(session_id) =
        cookies::access_token(&headers).and_then(|token| state.auth.session_id_of(&token))
        && let Err(e) = state.auth.logout(session_id).await
    {
        warn!("Failed to revoke session {}: {}", session_id, e);
    }

    if let Some(refresh_token) = cookies::read_cookie(&headers, REFRESH_COOKIE)
        && let Err(e) = state.auth.logout_by_refresh_token(&refresh_token).await
    {
        warn!("Failed to revoke session by refresh token: {}", e);
    }

    (state.cookies.logout_headers(), Redirect::to("/")).into_response()
}
