//! Route authority: maps (credential presence, requested path) to a
//! renderable outcome.
//!
//! The decision is recomputed on every navigation or session change and
//! never cached. Begin-login and end-session are button-delegated side
//! effects on the identity capability, not part of the decision.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Path the root redirects to once a session is established.
pub const ACTIVITIES_PATH: &str = "/activities";

/// Screens reachable inside the authenticated chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Activity list with the tracking form.
    Activities,
    /// Detail view keyed by the opaque activity id from the path.
    ActivityDetail(String),
    /// Authenticated navigation to a path outside the route table.
    NotFound,
}

/// Outcome of a navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// No session: only the login affordance is shown, whatever the path.
    LoginPrompt,
    /// Client-side redirect to the given path.
    Redirect(String),
    /// Render the screen inside the authenticated chrome.
    Screen(Screen),
}

/// Decide what the current path renders.
///
/// Unauthenticated requests funnel to the login prompt for every path; the
/// requested path is not preserved across login.
pub fn decide(authenticated: bool, path: &str) -> RouteDecision {
    if !authenticated {
        return RouteDecision::LoginPrompt;
    }

    let path = path.trim_end_matches('/');
    match path {
        "" => RouteDecision::Redirect(ACTIVITIES_PATH.to_owned()),
        ACTIVITIES_PATH => RouteDecision::Screen(Screen::Activities),
        _ => match path.strip_prefix("/activities/") {
            // The id is opaque and passed verbatim; nested segments are
            // not detail ids.
            Some(id) if !id.is_empty() && !id.contains('/') => {
                RouteDecision::Screen(Screen::ActivityDetail(id.to_owned()))
            }
            _ => RouteDecision::Screen(Screen::NotFound),
        },
    }
}
