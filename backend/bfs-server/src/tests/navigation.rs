use crate::pages::navigation::Navigation;

use bfs_core::Role;

#[test]
fn given_visitor_when_navigation_built_then_offers_sign_in_and_no_dashboard() {
    // Given / When
    let nav = Navigation::for_role(None);

    // Then
    assert!(nav.links_to("/login"));
    assert!(nav.links_to("/register"));
    assert!(!nav.links_to("/dashboard"));
    assert!(nav.dashboard.is_empty());
}

#[test]
fn given_user_when_navigation_built_then_no_agent_or_admin_links() {
    // Given / When
    let nav = Navigation::for_role(Some(Role::User));

    // Then
    assert!(nav.links_to("/dashboard/settings"));
    assert!(!nav.links_to("/login"));
    assert!(!nav.links_to("/dashboard/clients"));
    assert!(!nav.links_to("/dashboard/admin"));
}

#[test]
fn given_agent_when_navigation_built_then_clients_but_not_admin() {
    // Given / When
    let nav = Navigation::for_role(Some(Role::Agent));

    // Then
    assert!(nav.links_to("/dashboard/clients"));
    assert!(!nav.links_to("/dashboard/admin"));
}

#[test]
fn given_admin_when_navigation_built_then_every_dashboard_section() {
    // Given / When
    let nav = Navigation::for_role(Some(Role::Admin));

    // Then
    assert!(nav.links_to("/dashboard/clients"));
    assert!(nav.links_to("/dashboard/admin"));
}
