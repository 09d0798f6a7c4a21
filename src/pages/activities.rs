//! Activities page: tracking form above the activity list.

use leptos::prelude::*;

use crate::components::activity_form::ActivityForm;
use crate::components::activity_list::ActivityList;

/// List + create screen. The form's completion callback reloads the whole
/// view, matching the upstream contract for post-create behavior.
#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let on_added = Callback::new(move |()| reload());

    view! {
        <section class="activities-page">
            <ActivityForm on_added=on_added/>
            <ActivityList/>
        </section>
    }
}

/// Full view reload after a successful creation.
fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
