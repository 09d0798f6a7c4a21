//! Login prompt — the only affordance shown without a session.

use leptos::prelude::*;

use crate::identity;

/// Login page — clicking the button hands the browser to the identity
/// provider's hosted login flow.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"FitTrack"</h1>
            <p>"Welcome! Please log in to track your activities."</p>
            <button class="btn btn--primary login-page__button" on:click=move |_| identity::begin_login()>
                "Login"
            </button>
        </div>
    }
}
