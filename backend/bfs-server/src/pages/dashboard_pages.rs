//! Signed-in pages under `/dashboard`

use crate::pages::form_failure::FormFailure;
use crate::pages::page_session::PageSession;
use crate::{ApiResult, AppState};

use bfs_auth::route_guard::LOGIN_PATH;
use bfs_core::{Activity, Currency, FinancialSummary, PlanType, Theme, UserSettings, catalog};

use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};

const RECENT_ACTIVITY_ON_DASHBOARD: u32 = 10;
const SETTINGS_SAVED: &str = "/dashboard/settings?saved=1";

#[derive(Debug, Serialize)]
struct SummaryView {
    total_invested: String,
    current_value: String,
    total_gain: String,
    gain_percent: String,
    gain_positive: bool,
    holdings: usize,
    allocation: Vec<AllocationView>,
}

#[derive(Debug, Serialize)]
struct AllocationView {
    asset_class: String,
    current_value: String,
    share_percent: String,
}

#[derive(Debug, Serialize)]
struct ActivityView {
    kind: String,
    description: String,
    amount: Option<String>,
    occurred_at: String,
}

impl SummaryView {
    fn new(summary: &FinancialSummary, session: &PageSession) -> Self {
        Self {
            total_invested: session.money(summary.total_invested),
            current_value: session.money(summary.current_value),
            total_gain: session.money(summary.total_gain),
            gain_percent: format!("{:.2}%", summary.gain_percent),
            gain_positive: summary.total_gain >= 0.0,
            holdings: summary.holdings,
            allocation: summary
                .allocation
                .iter()
                .map(|entry| AllocationView {
                    asset_class: entry.asset_class.clone(),
                    current_value: session.money(entry.current_value),
                    share_percent: format!("{:.1}%", entry.share_percent),
                })
                .collect(),
        }
    }
}

impl ActivityView {
    fn new(activity: &Activity, session: &PageSession) -> Self {
        Self {
            kind: activity.kind.clone(),
            description: activity.description.clone(),
            amount: activity.amount.map(|amount| session.money(amount)),
            occurred_at: activity.occurred_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

/// GET /dashboard
pub async fn dashboard(State(state): State<AppState>, session: PageSession) -> Response {
    let Some(current) = session.current.clone() else {
        return Redirect::to(LOGIN_PATH).into_response();
    };

    let loaded: ApiResult<_> = async {
        let summary = state.dashboard.financial_summary(current.user.id).await?;
        let activities = state
            .dashboard
            .recent_activity(current.user.id, Some(RECENT_ACTIVITY_ON_DASHBOARD))
            .await?;
        Ok((summary, activities))
    }
    .await;

    let mut context = session.context("Dashboard");
    match loaded {
        Ok((summary, activities)) => {
            context.insert("summary", &SummaryView::new(&summary, &session));
            context.insert(
                "activities",
                &activities
                    .iter()
                    .map(|activity| ActivityView::new(activity, &session))
                    .collect::<Vec<_>>(),
            );
            context.insert("profile_complete", &current.user.profile_complete);
            state.renderer.page(StatusCode::OK, "dashboard.html", &context)
        }
        Err(e) => {
            let failure = FormFailure::from(e);
            context.insert("error", &failure.message);
            context.insert("profile_complete", &current.user.profile_complete);
            let response = state
                .renderer
                .page(failure.status, "dashboard.html", &context);
            failure.attach(response)
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SettingsQuery {
    pub saved: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub currency: String,
    /// Present only when the checkbox is ticked
    pub notifications_enabled: Option<String>,
}

impl SettingsForm {
    fn into_settings(self) -> ApiResult<UserSettings> {
        Ok(UserSettings {
            theme: self.theme.trim().parse::<Theme>()?,
            currency: self.currency.trim().parse::<Currency>()?,
            notifications_enabled: self.notifications_enabled.is_some(),
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

const THEMES: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];
const CURRENCIES: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Cad];

fn settings_page(
    state: &AppState,
    session: &PageSession,
    status: StatusCode,
    profile: &ProfileForm,
    saved: bool,
    error: Option<&str>,
) -> Response {
    let mut context = session.context("Settings");
    context.insert("settings", &session.settings);
    context.insert("themes", &THEMES.map(|t| t.as_str()));
    context.insert("currencies", &CURRENCIES.map(|c| c.as_str()));
    context.insert("profile", profile);
    context.insert("saved", &saved);
    if let Some(error) = error {
        context.insert("error", error);
    }
    state.renderer.page(status, "settings.html", &context)
}

/// GET /dashboard/settings
pub async fn settings(
    State(state): State<AppState>,
    session: PageSession,
    Query(query): Query<SettingsQuery>,
) -> Response {
    let Some(current) = session.current.as_ref() else {
        return Redirect::to(LOGIN_PATH).into_response();
    };

    let profile = ProfileForm {
        name: current.user.name.clone(),
        phone: current.user.phone.clone().unwrap_or_default(),
    };
    settings_page(
        &state,
        &session,
        StatusCode::OK,
        &profile,
        query.saved.is_some(),
        None,
    )
}

/// POST /dashboard/settings
pub async fn save_settings(
    State(state): State<AppState>,
    session: PageSession,
    Form(form): Form<SettingsForm>,
) -> Response {
    let Some(current) = session.current.clone() else {
        return Redirect::to(LOGIN_PATH).into_response();
    };

    let saved = async {
        let settings = form.into_settings()?;
        state.account.update_settings(current.user.id, settings).await
    }
    .await;

    match saved {
        Ok(_) => Redirect::to(SETTINGS_SAVED).into_response(),
        Err(e) => {
            let failure = FormFailure::from(e);
            let profile = ProfileForm {
                name: current.user.name.clone(),
                phone: current.user.phone.clone().unwrap_or_default(),
            };
            let response = settings_page(
                &state,
                &session,
                failure.status,
                &profile,
                false,
                Some(&failure.message),
            );
            failure.attach(response)
        }
    }
}

/// POST /dashboard/profile
pub async fn save_profile(
    State(state): State<AppState>,
    session: PageSession,
    Form(form): Form<ProfileForm>,
) -> Response {
    let Some(current) = session.current.clone() else {
        return Redirect::to(LOGIN_PATH).into_response();
    };

    match state
        .account
        .update_profile(current.user, &form.name, Some(&form.phone))
        .await
    {
        Ok(_) => Redirect::to(SETTINGS_SAVED).into_response(),
        Err(e) => {
            let failure = FormFailure::from(e);
            let response = settings_page(
                &state,
                &session,
                failure.status,
                &form,
                false,
                Some(&failure.message),
            );
            failure.attach(response)
        }
    }
}

// =============================================================================
// Admin and agent pages
// =============================================================================

#[derive(Debug, Serialize)]
struct PlanTypeCount {
    plan_type: &'static str,
    plans: usize,
}

/// GET /dashboard/admin
pub async fn admin(State(state): State<AppState>, session: PageSession) -> Response {
    let mut context = session.context("Administration");

    match state.contact.count().await {
        Ok(count) => context.insert("contact_messages", &count),
        Err(e) => {
            let failure = FormFailure::from(e);
            context.insert("error", &failure.message);
            let response = state
                .renderer
                .page(failure.status, "admin.html", &context);
            return failure.attach(response);
        }
    }
    context.insert("cache_enabled", &state.cache.is_enabled());
    context.insert("monitoring_enabled", &state.reporter.is_enabled());
    context.insert("rate_limited_clients", &state.rate_limiter.tracked_keys());
    context.insert("protected_routes", &state.guard.routes().len());

    state.renderer.page(StatusCode::OK, "admin.html", &context)
}

/// GET /dashboard/clients
pub async fn clients(State(state): State<AppState>, session: PageSession) -> Response {
    let mut context = session.context("Clients");

    let plan_counts: Vec<PlanTypeCount> = PlanType::ALL
        .iter()
        .map(|plan_type| PlanTypeCount {
            plan_type: plan_type.as_str(),
            plans: catalog::plans()
                .iter()
                .filter(|plan| plan.plan_type == *plan_type)
                .count(),
        })
        .collect();
    let accepting = catalog::providers()
        .iter()
        .filter(|provider| provider.accepting_new_patients)
        .count();

    context.insert("plan_counts", &plan_counts);
    context.insert("providers_accepting", &accepting);
    context.insert("providers_total", &catalog::providers().len());

    state.renderer.page(StatusCode::OK, "clients.html", &context)
}

/// GET /admin
pub async fn admin_redirect() -> Redirect {
    Redirect::to("/dashboard/admin")
}
