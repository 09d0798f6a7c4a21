//! Activity tracking form.

use leptos::prelude::*;

use crate::net::types::ActivityRequest;
use crate::state::session::SessionState;

const ACTIVITY_TYPES: [&str; 4] = ["RUNNING", "WALKING", "CYCLING", "SWIMMING"];

/// Form for tracking a new activity. Runs `on_added` once the create call
/// succeeds; validation failures keep the form as-is.
#[component]
pub fn ActivityForm(on_added: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let activity_type = RwSignal::new(ACTIVITY_TYPES[0].to_owned());
    let duration = RwSignal::new(String::new());
    let calories = RwSignal::new(String::new());
    let start_time = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let submit = move |_| {
        let Ok(duration) = duration.get().trim().parse::<i32>() else {
            return;
        };
        let Ok(calories_burned) = calories.get().trim().parse::<i32>() else {
            return;
        };
        if submitting.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let state = session.get_untracked();
            let request = ActivityRequest {
                user_id: state.user_id().unwrap_or_default().to_owned(),
                activity_type: activity_type.get_untracked(),
                duration,
                calories_burned,
                start_time: start_time.get_untracked(),
                additional_metrics: None,
            };
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let created = crate::net::api::create_activity(&state, &request).await;
                submitting.set(false);
                if created.is_some() {
                    on_added.run(());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (duration, calories_burned, session, on_added);
        }
    };

    view! {
        <form class="activity-form" on:submit=move |ev| ev.prevent_default()>
            <label class="activity-form__label">
                "Activity"
                <select
                    class="activity-form__input"
                    prop:value=move || activity_type.get()
                    on:change=move |ev| activity_type.set(event_target_value(&ev))
                >
                    {ACTIVITY_TYPES
                        .into_iter()
                        .map(|t| view! { <option value=t>{t}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="activity-form__label">
                "Duration (minutes)"
                <input
                    class="activity-form__input"
                    type="number"
                    min="1"
                    prop:value=move || duration.get()
                    on:input=move |ev| duration.set(event_target_value(&ev))
                />
            </label>
            <label class="activity-form__label">
                "Calories burned"
                <input
                    class="activity-form__input"
                    type="number"
                    min="0"
                    prop:value=move || calories.get()
                    on:input=move |ev| calories.set(event_target_value(&ev))
                />
            </label>
            <label class="activity-form__label">
                "Start time"
                <input
                    class="activity-form__input"
                    type="datetime-local"
                    prop:value=move || start_time.get()
                    on:input=move |ev| start_time.set(event_target_value(&ev))
                />
            </label>
            <button
                class="btn btn--primary"
                disabled=move || submitting.get()
                on:click=submit
            >
                {move || if submitting.get() { "Tracking..." } else { "Track Activity" }}
            </button>
        </form>
    }
}
