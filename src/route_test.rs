use super::*;

// =============================================================
// Unauthenticated policy
// =============================================================

#[test]
fn unauthenticated_always_gets_the_login_prompt() {
    for path in ["/", "/activities", "/activities/5", "/activities/abc/", "/settings", ""] {
        assert_eq!(
            decide(false, path),
            RouteDecision::LoginPrompt,
            "path {path:?}"
        );
    }
}

// =============================================================
// Authenticated route table
// =============================================================

#[test]
fn root_redirects_to_activities() {
    assert_eq!(
        decide(true, "/"),
        RouteDecision::Redirect("/activities".to_owned())
    );
}

#[test]
fn activities_path_renders_the_list() {
    assert_eq!(
        decide(true, "/activities"),
        RouteDecision::Screen(Screen::Activities)
    );
}

#[test]
fn detail_id_is_passed_verbatim() {
    assert_eq!(
        decide(true, "/activities/abc123"),
        RouteDecision::Screen(Screen::ActivityDetail("abc123".to_owned()))
    );
}

#[test]
fn trailing_slashes_are_normalized() {
    assert_eq!(
        decide(true, "/activities/"),
        RouteDecision::Screen(Screen::Activities)
    );
    assert_eq!(
        decide(true, "/activities/abc123/"),
        RouteDecision::Screen(Screen::ActivityDetail("abc123".to_owned()))
    );
}

#[test]
fn unknown_authenticated_paths_are_not_found() {
    assert_eq!(
        decide(true, "/settings"),
        RouteDecision::Screen(Screen::NotFound)
    );
    assert_eq!(
        decide(true, "/activities/a/b"),
        RouteDecision::Screen(Screen::NotFound)
    );
}
