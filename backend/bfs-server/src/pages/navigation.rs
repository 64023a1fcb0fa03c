//! Role-dependent navigation links.

use bfs_core::Role;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

const fn item(label: &'static str, href: &'static str) -> NavItem {
    NavItem { label, href }
}

/// Links shown in the site header and the dashboard sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub main: Vec<NavItem>,
    pub dashboard: Vec<NavItem>,
}

impl Navigation {
    /// `None` is a visitor without a session.
    pub fn for_role(role: Option<Role>) -> Self {
        let mut main = vec![
            item("Home", "/"),
            item("Services", "/services"),
            item("About", "/about"),
            item("Contact", "/contact"),
        ];

        let Some(role) = role else {
            main.push(item("Sign in", "/login"));
            main.push(item("Register", "/register"));
            return Self {
                main,
                dashboard: Vec::new(),
            };
        };

        main.push(item("Dashboard", "/dashboard"));

        let mut dashboard = vec![
            item("Overview", "/dashboard"),
            item("Calculators", "/dashboard/calculators"),
            item("Plans", "/dashboard/plans"),
            item("Providers", "/dashboard/providers"),
            item("Settings", "/dashboard/settings"),
        ];
        if role.satisfies(Role::Agent) {
            dashboard.push(item("Clients", "/dashboard/clients"));
        }
        if role.satisfies(Role::Admin) {
            dashboard.push(item("Admin", "/dashboard/admin"));
        }

        Self { main, dashboard }
    }

    pub fn links_to(&self, href: &str) -> bool {
        self.main
            .iter()
            .chain(self.dashboard.iter())
            .any(|nav| nav.href == href)
    }
}
