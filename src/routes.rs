#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path of the login page, the redirect target for unauthenticated access.
pub const LOGIN_PATH: &str = "/login";
/// Path of the signup page.
pub const SIGNUP_PATH: &str = "/signup";
/// Landing page for an authenticated session.
pub const TODOS_PATH: &str = "/todos";

/// Access policy attached to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Reachable regardless of session state.
    Public,
    /// Requires a stored session token.
    AuthenticatedOnly,
    /// Login/signup screens; an existing session is bounced to the landing page.
    GuestOnly,
}

/// One entry of the static route table.
#[derive(Clone, Copy, Debug)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub access: RouteAccess,
}

/// The application's route table, fixed at startup.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: LOGIN_PATH,
        name: "Login",
        access: RouteAccess::GuestOnly,
    },
    RouteDescriptor {
        path: SIGNUP_PATH,
        name: "Signup",
        access: RouteAccess::GuestOnly,
    },
    RouteDescriptor {
        path: TODOS_PATH,
        name: "Todos",
        access: RouteAccess::AuthenticatedOnly,
    },
];

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the target unchanged.
    Allow,
    /// Abandon the target and navigate to the given path instead.
    RedirectTo(&'static str),
}

/// Look up the route table entry for `path`.
///
/// Query strings, fragments, and a trailing slash are ignored for matching.
pub fn find_route(path: &str) -> Option<&'static RouteDescriptor> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    ROUTES.iter().find(|r| r.path == path)
}

/// Access policy for `path`. Unmatched paths are public.
pub fn route_access(path: &str) -> RouteAccess {
    find_route(path).map_or(RouteAccess::Public, |r| r.access)
}

/// The guard policy: a total function of the target route's access level
/// and whether a session token is currently stored.
///
/// Token validity is not checked here; a stale token surfaces later as a
/// rejected authenticated API call.
pub fn decide(access: RouteAccess, token_present: bool) -> GuardDecision {
    match access {
        RouteAccess::AuthenticatedOnly if !token_present => GuardDecision::RedirectTo(LOGIN_PATH),
        RouteAccess::GuestOnly if token_present => GuardDecision::RedirectTo(TODOS_PATH),
        RouteAccess::Public | RouteAccess::AuthenticatedOnly | RouteAccess::GuestOnly => {
            GuardDecision::Allow
        }
    }
}

/// Guard check for a navigation to `path` with the given stored token.
///
/// A blank token counts as absent. The check is synchronous, touches no
/// network, and resolves every input to a decision.
pub fn check_navigation(path: &str, token: Option<&str>) -> GuardDecision {
    let present = token.is_some_and(|t| !t.trim().is_empty());
    decide(route_access(path), present)
}
