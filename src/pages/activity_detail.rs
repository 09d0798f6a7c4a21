//! Activity detail page with the AI recommendation panel.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Activity, Recommendation};
use crate::state::session::SessionState;

/// Detail screen keyed by the opaque activity id from the route. The id is
/// passed verbatim to the backend; a miss renders as "not found".
#[component]
pub fn ActivityDetailPage(id: String) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let activity = LocalResource::new({
        let id = id.clone();
        move || {
            let state = session.get();
            let id = id.clone();
            async move { api::fetch_activity(&state, &id).await }
        }
    });

    let recommendation = LocalResource::new({
        let id = id.clone();
        move || {
            let state = session.get();
            let id = id.clone();
            async move { api::fetch_activity_recommendation(&state, &id).await }
        }
    });

    view! {
        <section class="activity-detail">
            <Suspense fallback=move || view! { <p>"Loading activity..."</p> }>
                {move || {
                    activity.get().map(|found| match found {
                        Some(activity) => view! { <ActivityFacts activity=activity/> }.into_any(),
                        None => view! { <p class="activity-detail__missing">"Activity not found."</p> }.into_any(),
                    })
                }}
            </Suspense>

            <Suspense fallback=move || view! { <p>"Analyzing activity..."</p> }>
                {move || {
                    recommendation.get().map(|found| {
                        found
                            .map(|rec| view! { <RecommendationPanel recommendation=rec/> })
                    })
                }}
            </Suspense>
        </section>
    }
}

/// Core activity fields.
#[component]
fn ActivityFacts(activity: Activity) -> impl IntoView {
    view! {
        <div class="activity-detail__facts">
            <h2>{activity.activity_type.clone()}</h2>
            <dl>
                <dt>"Duration"</dt>
                <dd>{activity.duration.map_or_else(|| "-".to_owned(), |d| format!("{d} min"))}</dd>
                <dt>"Calories burned"</dt>
                <dd>{activity.calories_burned.map_or_else(|| "-".to_owned(), |c| c.to_string())}</dd>
                <dt>"Started"</dt>
                <dd>{activity.start_time.clone().unwrap_or_else(|| "-".to_owned())}</dd>
            </dl>
        </div>
    }
}

/// AI analysis: summary text plus improvement/suggestion/safety lists.
#[component]
fn RecommendationPanel(recommendation: Recommendation) -> impl IntoView {
    let list = |title: &'static str, items: Vec<String>| {
        (!items.is_empty()).then(|| {
            view! {
                <div class="activity-detail__list">
                    <h4>{title}</h4>
                    <ul>
                        {items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
            }
        })
    };

    view! {
        <div class="activity-detail__recommendation">
            <h3>"AI Analysis"</h3>
            <p>{recommendation.recommendation.clone().unwrap_or_default()}</p>
            {list("Improvements", recommendation.improvements)}
            {list("Suggestions", recommendation.suggestions)}
            {list("Safety", recommendation.safety)}
        </div>
    }
}
