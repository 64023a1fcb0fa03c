//! Static table of protected path prefixes and the decision made for each
//! page request.

use crate::SessionContext;

use bfs_core::Role;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// A protected path prefix. `required_role: None` means any signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedRoute {
    pub prefix: String,
    pub required_role: Option<Role>,
}

impl ProtectedRoute {
    pub fn authenticated(prefix: &str) -> Self {
        Self {
            prefix: normalize(prefix).to_string(),
            required_role: None,
        }
    }

    pub fn with_role(prefix: &str, role: Role) -> Self {
        Self {
            prefix: normalize(prefix).to_string(),
            required_role: Some(role),
        }
    }

    /// Prefix match on whole path segments: `/dashboard` covers
    /// `/dashboard` and `/dashboard/settings` but not `/dashboards`.
    fn covers(&self, path: &str) -> bool {
        if self.prefix == "/" {
            return true;
        }
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No valid session
    Unauthenticated,
    /// Signed in, but the role is below what the route requires
    Forbidden { required: Role, actual: Role },
}

impl DenyReason {
    pub fn redirect_target(&self) -> &'static str {
        match self {
            Self::Unauthenticated => LOGIN_PATH,
            Self::Forbidden { .. } => UNAUTHORIZED_PATH,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden { .. } => "forbidden",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed,
    Denied(DenyReason),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    routes: Vec<ProtectedRoute>,
}

impl RouteGuard {
    pub fn new(routes: Vec<ProtectedRoute>) -> Self {
        Self { routes }
    }

    /// The portal's page table
    pub fn with_default_routes() -> Self {
        Self::new(vec![
            ProtectedRoute::authenticated("/dashboard"),
            ProtectedRoute::with_role("/dashboard/admin", Role::Admin),
            ProtectedRoute::with_role("/dashboard/clients", Role::Agent),
            ProtectedRoute::with_role("/admin", Role::Admin),
        ])
    }

    pub fn routes(&self) -> &[ProtectedRoute] {
        &self.routes
    }

    /// Longest protected prefix covering `path`, if any
    pub fn matching_route(&self, path: &str) -> Option<&ProtectedRoute> {
        let path = normalize(path);
        self.routes
            .iter()
            .filter(|route| route.covers(path))
            .max_by_key(|route| route.prefix.len())
    }

    pub fn evaluate(&self, path: &str, session: Option<&SessionContext>) -> GuardDecision {
        let Some(route) = self.matching_route(path) else {
            return GuardDecision::Allowed;
        };

        let Some(session) = session else {
            return GuardDecision::Denied(DenyReason::Unauthenticated);
        };

        match route.required_role {
            Some(required) if !session.role.satisfies(required) => {
                GuardDecision::Denied(DenyReason::Forbidden {
                    required,
                    actual: session.role,
                })
            }
            _ => GuardDecision::Allowed,
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::with_default_routes()
    }
}

/// Drop any query string and trailing slashes (but keep the root `/`)
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
