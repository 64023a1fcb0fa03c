//! Session resolution and route guarding for HTML pages.

use crate::AppState;
use crate::api::cookies::{self, REFRESH_COOKIE};
use crate::pages::navigation::Navigation;
use crate::services::auth_service::CurrentUser;

use bfs_auth::GuardDecision;
use bfs_core::{Role, UserSettings};

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, HeaderValue, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::{Datelike, Utc};
use log::{debug, info, warn};
use tera::Context;

pub const SITE_NAME: &str = "Buckalew Financial Services";

/// Who is viewing a page and how they want it displayed
#[derive(Debug, Clone, Default)]
pub struct PageSession {
    pub current: Option<CurrentUser>,
    pub settings: UserSettings,
}

impl PageSession {
    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|current| current.user.role)
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    /// Values every template expects
    pub fn context(&self, title: &str) -> Context {
        let mut context = Context::new();
        context.insert("site_name", SITE_NAME);
        context.insert("title", title);
        context.insert(
            "user",
            &self.current.as_ref().map(|current| current.user.public()),
        );
        context.insert("theme", self.settings.theme.as_str());
        context.insert("currency", self.settings.currency.as_str());
        context.insert("nav", &Navigation::for_role(self.role()));
        context.insert("year", &Utc::now().year());
        context
    }

    /// Format an amount in the viewer's currency
    pub fn money(&self, amount: f64) -> String {
        self.settings.currency.format(amount)
    }
}

/// Pages outside the guard middleware see an anonymous session.
impl<S: Send + Sync> FromRequestParts<S> for PageSession {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<PageSession>()
            .cloned()
            .unwrap_or_default())
    }
}

/// Middleware: resolve the viewer, apply the route guard, and expose the
/// result to page handlers as a [`PageSession`].
///
/// An expired access token is replaced using the refresh cookie; the new
/// session cookie is added to whatever response the page produces.
pub async fn guard_pages(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let (current, renewed_cookie) = resolve_viewer(&state, request.headers()).await;

    let decision = state
        .guard
        .evaluate(&path, current.as_ref().map(|current| &current.session));

    if let GuardDecision::Denied(reason) = decision {
        match &current {
            Some(current) => warn!(
                "Guard denied {} to user {} ({}): {}",
                path,
                current.user.id,
                current.user.role,
                reason.as_str()
            ),
            None => info!("Guard denied {} to anonymous visitor", path),
        }
        state.metrics.guard_denied(reason.as_str());

        let response = Redirect::to(reason.redirect_target()).into_response();
        return with_cookie(response, renewed_cookie);
    }

    let settings = match &current {
        Some(current) => match state.account.settings(current.user.id).await {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Using default settings for {}: {}", current.user.id, e);
                UserSettings::default()
            }
        },
        None => UserSettings::default(),
    };

    request
        .extensions_mut()
        .insert(PageSession { current, settings });

    let response = next.run(request).await;
    with_cookie(response, renewed_cookie)
}

async fn resolve_viewer(state: &AppState, headers: &HeaderMap) -> (Option<CurrentUser>, Option<String>) {
    if let Some(token) = cookies::access_token(headers) {
        match state.auth.current_user(&token).await {
            Ok(current) => return (Some(current), None),
            Err(e) => debug!("Access token rejected: {}", e),
        }
    }

    let Some(refresh_token) = cookies::read_cookie(headers, REFRESH_COOKIE) else {
        return (None, None);
    };

    let renewed = match state.auth.refresh(&refresh_token).await {
        Ok(outcome) => outcome.access,
        Err(e) => {
            debug!("Refresh cookie rejected: {}", e);
            return (None, None);
        }
    };

    match state.auth.current_user(&renewed.token).await {
        Ok(current) => (
            Some(current),
            Some(state.cookies.session_cookie(&renewed.token)),
        ),
        Err(e) => {
            debug!("Renewed token rejected: {}", e);
            (None, None)
        }
    }
}

fn with_cookie(mut response: Response, cookie: Option<String>) -> Response {
    if let Some(value) = cookie.and_then(|cookie| HeaderValue::from_str(&cookie).ok()) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}
