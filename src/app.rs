//! Root application component: context providers, session bridge, and the
//! decision-driven route renderer.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;

use crate::identity::{self, IdentityState};
use crate::pages::activities::ActivitiesPage;
use crate::pages::activity_detail::ActivityDetailPage;
use crate::pages::login::LoginPage;
use crate::route::{RouteDecision, Screen, decide};
use crate::state::bridge::mount_session_bridge;
use crate::state::session::{SessionPhase, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the identity and session contexts, mounts the bridge that
/// keeps them reconciled, and renders whatever the route authority admits.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let identity = IdentityState::new();
    let session = RwSignal::new(SessionState::default());
    provide_context(identity);
    provide_context(session);

    // Bridge first: it must observe the bootstrap restore below.
    mount_session_bridge(identity, session);
    identity::bootstrap(identity);

    view! {
        <Stylesheet id="leptos" href="/pkg/fittrack.css"/>
        <Title text="FitTrack"/>

        <Router>
            <AdmittedView/>
        </Router>
    }
}

/// Renders the route authority's decision for the current session phase
/// and path. Lives inside `Router` so it can observe the location.
#[component]
fn AdmittedView() -> impl IntoView {
    let identity = expect_context::<IdentityState>();
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    move || {
        let phase = SessionPhase::derive(identity.credential.read().is_some(), &session.read());
        if phase == SessionPhase::Reconciling {
            // The store has not caught up with the latest identity change;
            // feature screens are withheld rather than fed a stale record.
            return view! { <p class="app__reconciling">"Signing in..."</p> }.into_any();
        }

        let authenticated = phase == SessionPhase::Authenticated;
        match decide(authenticated, &location.pathname.get()) {
            RouteDecision::LoginPrompt => view! { <LoginPage/> }.into_any(),
            RouteDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
            RouteDecision::Screen(screen) => view! { <AuthenticatedShell screen=screen/> }.into_any(),
        }
    }
}

/// Chrome around the feature screens: the logout affordance plus the
/// admitted screen.
#[component]
fn AuthenticatedShell(screen: Screen) -> impl IntoView {
    let identity = expect_context::<IdentityState>();

    view! {
        <section class="app-shell">
            <header class="app-shell__header">
                <button
                    class="btn btn--secondary"
                    on:click=move |_| identity::end_session(identity)
                >
                    "Logout"
                </button>
            </header>
            {match screen {
                Screen::Activities => view! { <ActivitiesPage/> }.into_any(),
                Screen::ActivityDetail(id) => view! { <ActivityDetailPage id=id/> }.into_any(),
                Screen::NotFound => {
                    view! { <p class="app-shell__not-found">"Page not found."</p> }.into_any()
                }
            }}
        </section>
    }
}
