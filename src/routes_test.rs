use super::*;

// =============================================================
// Route table lookup
// =============================================================

#[test]
fn find_route_matches_known_paths() {
    assert_eq!(find_route("/login").map(|r| r.name), Some("Login"));
    assert_eq!(find_route("/signup").map(|r| r.name), Some("Signup"));
    assert_eq!(find_route("/todos").map(|r| r.name), Some("Todos"));
}

#[test]
fn find_route_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(find_route("/todos?filter=open").map(|r| r.name), Some("Todos"));
    assert_eq!(find_route("/login#form").map(|r| r.name), Some("Login"));
    assert_eq!(find_route("/todos/").map(|r| r.name), Some("Todos"));
}

#[test]
fn unknown_paths_are_public() {
    assert_eq!(route_access("/nope"), RouteAccess::Public);
    assert_eq!(route_access(""), RouteAccess::Public);
    assert_eq!(route_access("/"), RouteAccess::Public);
}

// =============================================================
// Guard policy
// =============================================================

#[test]
fn authenticated_only_without_token_redirects_to_login() {
    assert_eq!(
        decide(RouteAccess::AuthenticatedOnly, false),
        GuardDecision::RedirectTo(LOGIN_PATH)
    );
}

#[test]
fn authenticated_only_with_token_allows() {
    assert_eq!(decide(RouteAccess::AuthenticatedOnly, true), GuardDecision::Allow);
}

#[test]
fn guest_only_with_token_redirects_to_landing() {
    assert_eq!(
        decide(RouteAccess::GuestOnly, true),
        GuardDecision::RedirectTo(TODOS_PATH)
    );
}

#[test]
fn guest_only_without_token_allows() {
    assert_eq!(decide(RouteAccess::GuestOnly, false), GuardDecision::Allow);
}

#[test]
fn public_allows_regardless_of_token() {
    assert_eq!(decide(RouteAccess::Public, true), GuardDecision::Allow);
    assert_eq!(decide(RouteAccess::Public, false), GuardDecision::Allow);
}

#[test]
fn decide_is_idempotent() {
    for access in [
        RouteAccess::Public,
        RouteAccess::AuthenticatedOnly,
        RouteAccess::GuestOnly,
    ] {
        for present in [false, true] {
            assert_eq!(decide(access, present), decide(access, present));
        }
    }
}

// =============================================================
// End-to-end navigation checks
// =============================================================

#[test]
fn navigate_to_todos_without_token_redirects_to_login() {
    assert_eq!(
        check_navigation("/todos", None),
        GuardDecision::RedirectTo("/login")
    );
}

#[test]
fn navigate_to_login_with_token_redirects_to_todos() {
    assert_eq!(
        check_navigation("/login", Some("abc123")),
        GuardDecision::RedirectTo("/todos")
    );
}

#[test]
fn navigate_to_signup_without_token_proceeds() {
    assert_eq!(check_navigation("/signup", None), GuardDecision::Allow);
}

#[test]
fn blank_token_counts_as_absent() {
    assert_eq!(
        check_navigation("/todos", Some("")),
        GuardDecision::RedirectTo("/login")
    );
    assert_eq!(
        check_navigation("/todos", Some("   ")),
        GuardDecision::RedirectTo("/login")
    );
}

#[test]
fn navigate_to_unknown_path_proceeds_with_or_without_token() {
    assert_eq!(check_navigation("/about", None), GuardDecision::Allow);
    assert_eq!(check_navigation("/about", Some("abc123")), GuardDecision::Allow);
}
