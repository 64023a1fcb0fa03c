//! Registration, login, logout, token refresh and session resolution.

use crate::{ApiError, ApiResult, Metrics};

use bfs_auth::{
    IssuedToken, JwtValidator, PasswordHasher, SessionContext, TokenIssuer,
    generate_refresh_token,
};
use bfs_core::{Activity, Session, User, validation};
use bfs_db::{ActivityRepository, SessionRepository, UserRepository};

use std::sync::Arc;

use chrono::{Duration, Utc};
use log::{info, warn};
use sqlx::SqlitePool;
use uuid::Uuid;

/// The authenticated caller, with the role as currently stored
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub session: SessionContext,
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub access: IssuedToken,
    pub refresh_token: String,
    pub session_id: Uuid,
}

/// Result of exchanging a refresh token
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub user: User,
    pub access: IssuedToken,
}

#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    sessions: SessionRepository,
    activities: ActivityRepository,
    hasher: Arc<PasswordHasher>,
    issuer: Arc<TokenIssuer>,
    validator: Arc<JwtValidator>,
    refresh_ttl: Duration,
    metrics: Metrics,
}

impl AuthService {
    pub fn new(
        pool: SqlitePool,
        hasher: PasswordHasher,
        issuer: TokenIssuer,
        validator: JwtValidator,
        refresh_ttl: Duration,
        metrics: Metrics,
    ) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            sessions: SessionRepository::new(pool.clone()),
            activities: ActivityRepository::new(pool),
            hasher: Arc::new(hasher),
            issuer: Arc::new(issuer),
            validator: Arc::new(validator),
            refresh_ttl,
            metrics,
        }
    }

    /// Create a `user`-role account and return it.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> ApiResult<User> {
        validation::validate_email(email)?;
        validation::validate_password(password)?;
        validation::validate_name(name)?;

        let email = validation::normalize_email(email);
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(account_exists());
        }

        let password_hash = self.hash_password(password).await?;
        let user = User::new(email, name.trim().to_string(), password_hash);

        // The UNIQUE constraint still decides concurrent registrations.
        self.users.create(&user).await.map_err(|e| {
            if e.is_unique_violation() {
                account_exists()
            } else {
                ApiError::from(e)
            }
        })?;

        self.record(Activity::new(
            user.id,
            Activity::ACCOUNT_CREATED,
            "Account created",
        ))
        .await;
        self.metrics.user_registered();
        info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Verify credentials and open a session.
    ///
    /// Unknown emails and wrong passwords fail identically; a dummy hash is
    /// verified for unknown emails so both paths cost the same.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginOutcome> {
        let email = validation::normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::validation(
                None,
                "Email and password are required",
            ));
        }

        let Some(user) = self.users.find_by_email(&email).await? else {
            self.burn_verification(password).await?;
            self.metrics.login_attempt("failure");
            return Err(ApiError::invalid_credentials());
        };

        if !self.verify_password(password, &user.password_hash).await? {
            self.metrics.login_attempt("failure");
            return Err(ApiError::invalid_credentials());
        }

        let session = Session::new(user.id, generate_refresh_token(), self.refresh_ttl);
        self.sessions.create(&session).await?;
        let access = self.issuer.issue(user.id, session.id, user.role)?;

        self.record(Activity::new(user.id, Activity::LOGIN, "Signed in"))
            .await;
        self.metrics.login_attempt("success");
        info!("User {} signed in (session {})", user.id, session.id);

        Ok(LoginOutcome {
            user,
            access,
            refresh_token: session.refresh_token,
            session_id: session.id,
        })
    }

    /// Revoke a session. Unknown and already-revoked sessions are not errors.
    pub async fn logout(&self, session_id: Uuid) -> ApiResult<()> {
        if self.sessions.revoke(session_id, Utc::now()).await? {
            info!("Session {} revoked", session_id);
        }
        Ok(())
    }

    /// Revoke the session owning a refresh token, if any.
    pub async fn logout_by_refresh_token(&self, refresh_token: &str) -> ApiResult<()> {
        if let Some(session) = self.sessions.find_by_refresh_token(refresh_token).await? {
            self.logout(session.id).await?;
        }
        Ok(())
    }

    /// Session id carried by an access token, without touching the database.
    ///
    /// Expired tokens are accepted here so that signing out still revokes
    /// the session behind them.
    pub fn session_id_of(&self, token: &str) -> Option<Uuid> {
        self.validator
            .validate_ignoring_expiry(token)
            .ok()
            .and_then(|claims| SessionContext::from_claims(&claims).ok())
            .map(|context| context.session_id)
    }

    /// Resolve an access token to its user.
    pub async fn current_user(&self, token: &str) -> ApiResult<CurrentUser> {
        let claims = self.validator.validate(token)?;
        let context = SessionContext::from_claims(&claims)?;

        let session = self
            .sessions
            .find_by_id(context.session_id)
            .await?
            .filter(|session| session.user_id == context.user_id && session.is_active())
            .ok_or_else(|| ApiError::unauthenticated("Session expired or revoked"))?;

        let user = self
            .users
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| ApiError::unauthenticated("Account no longer exists"))?;

        Ok(CurrentUser {
            session: SessionContext {
                role: user.role,
                ..context
            },
            user,
        })
    }

    /// Exchange an active session's refresh token for a new access token.
    pub async fn refresh(&self, refresh_token: &str) -> ApiResult<RefreshOutcome> {
        if refresh_token.trim().is_empty() {
            return Err(ApiError::unauthenticated("Refresh token required"));
        }

        let session = self
            .sessions
            .find_by_refresh_token(refresh_token)
            .await?
            .filter(Session::is_active)
            .ok_or_else(|| ApiError::unauthenticated("Session expired or revoked"))?;

        let user = self
            .users
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| ApiError::unauthenticated("Account no longer exists"))?;

        let access = self.issuer.issue(user.id, session.id, user.role)?;
        self.metrics.token_refreshed();

        Ok(RefreshOutcome { user, access })
    }

    /// Append to the user's activity feed; failures are logged, not returned.
    pub async fn record(&self, activity: Activity) {
        if let Err(e) = self.activities.create(&activity).await {
            warn!(
                "Failed to record '{}' activity for {}: {}",
                activity.kind, activity.user_id, e
            );
        }
    }

    async fn hash_password(&self, password: &str) -> ApiResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| ApiError::internal(format!("Password hashing task failed: {e}")))?
            .map_err(ApiError::from)
    }

    async fn verify_password(&self, password: &str, hash: &str) -> ApiResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| ApiError::internal(format!("Password verification task failed: {e}")))?
            .map_err(ApiError::from)
    }

    async fn burn_verification(&self, password: &str) -> ApiResult<()> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.verify_dummy(&password))
            .await
            .map_err(|e| ApiError::internal(format!("Password verification task failed: {e}")))
    }
}

#[track_caller]
fn account_exists() -> ApiError {
    ApiError::conflict("An account with this email already exists")
}
