//! Activity list with links into the detail screen.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Activity;
use crate::state::session::SessionState;

/// Card list of the signed-in user's tracked activities.
#[component]
pub fn ActivityList() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let activities = LocalResource::new(move || {
        let state = session.get();
        async move { api::fetch_activities(&state).await.unwrap_or_default() }
    });

    view! {
        <div class="activity-list">
            <Suspense fallback=move || view! { <p>"Loading activities..."</p> }>
                {move || {
                    activities.get().map(|list| {
                        if list.is_empty() {
                            view! {
                                <p class="activity-list__empty">"No activities tracked yet."</p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="activity-list__cards">
                                    {list
                                        .into_iter()
                                        .map(|activity| view! { <ActivityCard activity=activity/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// One activity summary. Links to the detail screen when the backend
/// supplied an id; renders as a plain card otherwise.
#[component]
fn ActivityCard(activity: Activity) -> impl IntoView {
    let summary = format!(
        "{} min, {} kcal",
        activity.duration.unwrap_or_default(),
        activity.calories_burned.unwrap_or_default()
    );

    match activity.id {
        Some(id) => view! {
            <a class="activity-card" href=format!("/activities/{id}")>
                <span class="activity-card__type">{activity.activity_type}</span>
                <span class="activity-card__summary">{summary}</span>
            </a>
        }
        .into_any(),
        None => view! {
            <div class="activity-card activity-card--unlinked">
                <span class="activity-card__type">{activity.activity_type}</span>
                <span class="activity-card__summary">{summary}</span>
            </div>
        }
        .into_any(),
    }
}
