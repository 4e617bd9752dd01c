use super::*;

// =============================================================
// decide: full decision table
// =============================================================

#[test]
fn guest_route_redirects_authenticated_visitor_to_root() {
    assert_eq!(
        decide(RouteRequirement::RequiresGuest, true),
        GuardDecision::RedirectTo("/")
    );
}

#[test]
fn guest_route_admits_logged_out_visitor() {
    assert_eq!(
        decide(RouteRequirement::RequiresGuest, false),
        GuardDecision::Proceed
    );
}

#[test]
fn auth_route_redirects_logged_out_visitor_to_login() {
    assert_eq!(
        decide(RouteRequirement::RequiresAuth, false),
        GuardDecision::RedirectTo("/login")
    );
}

#[test]
fn auth_route_admits_authenticated_visitor() {
    assert_eq!(
        decide(RouteRequirement::RequiresAuth, true),
        GuardDecision::Proceed
    );
}

#[test]
fn untagged_route_always_proceeds() {
    assert_eq!(decide(RouteRequirement::None, false), GuardDecision::Proceed);
    assert_eq!(decide(RouteRequirement::None, true), GuardDecision::Proceed);
}

#[test]
fn default_requirement_is_untagged() {
    assert_eq!(RouteRequirement::default(), RouteRequirement::None);
}

#[test]
fn redirect_targets_match_route_table() {
    assert_eq!(LOGIN_PATH, "/login");
    assert_eq!(ROOT_PATH, "/");
}
