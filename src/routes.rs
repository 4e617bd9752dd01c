//! Route access control: per-route requirement tags and the navigation guard.
//!
//! Every navigable route declares at registration time whether it needs an
//! authenticated visitor, a guest, or neither. [`decide`] turns that tag plus
//! the current session into a navigation decision; [`RouteGuard`] applies the
//! decision around a route's view, rendering either the destination or a
//! redirect. The guard reads only in-memory state and never mutates the
//! session.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::SessionStore;

/// Where unauthenticated visitors are sent when a route needs a login.
pub const LOGIN_PATH: &str = "/login";
/// Where logged-in visitors are sent away from guest-only routes.
pub const ROOT_PATH: &str = "/";

/// Static access tag attached to a route when it is registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteRequirement {
    /// Reachable by anyone.
    #[default]
    None,
    /// Only reachable while logged in.
    RequiresAuth,
    /// Only reachable while logged out (login, register).
    RequiresGuest,
}

/// Outcome of evaluating a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RedirectTo(&'static str),
}

/// Decide a single navigation attempt.
///
/// Pure: one evaluation per attempt, no I/O, no retries. The guest check is
/// evaluated before the auth check.
pub fn decide(requirement: RouteRequirement, is_authenticated: bool) -> GuardDecision {
    match requirement {
        RouteRequirement::RequiresGuest if is_authenticated => {
            GuardDecision::RedirectTo(ROOT_PATH)
        }
        RouteRequirement::RequiresAuth if !is_authenticated => {
            GuardDecision::RedirectTo(LOGIN_PATH)
        }
        _ => GuardDecision::Proceed,
    }
}

/// Wraps a route's view and enforces its [`RouteRequirement`].
///
/// Re-evaluates when the session changes, so logging out while on a
/// protected page bounces the visitor to the login route.
#[component]
pub fn RouteGuard(requirement: RouteRequirement, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();

    move || match decide(requirement, session.is_authenticated()) {
        GuardDecision::Proceed => children(),
        GuardDecision::RedirectTo(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
