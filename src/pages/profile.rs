//! Profile page: identity from the token claims plus account statistics.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let stats = LocalResource::new(|| crate::net::api::fetch_stats());

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>

            {move || {
                session.get().user.map(|user| {
                    view! {
                        <div class="profile-page__identity">
                            <p>"Email: " {user.email.clone()}</p>
                            {user.user_id.map(|id| view! { <p>"User id: " {id}</p> })}
                        </div>
                    }
                })
            }}

            <h2>"Your statistics"</h2>
            <Suspense fallback=move || view! { <p>"Loading statistics..."</p> }>
                {move || {
                    stats.get().map(|result| match result.as_ref() {
                        Ok(s) => {
                            view! {
                                <div class="profile-page__stats">
                                    <p>"Total analyses: " {s.total_analyses}</p>
                                    {s
                                        .most_common_type
                                        .clone()
                                        .map(|t| view! { <p>"Most common soil type: " {t}</p> })}
                                    {s
                                        .latest_analysis_date
                                        .clone()
                                        .map(|d| view! { <p>"Latest analysis: " {d}</p> })}
                                    <ul class="profile-page__breakdown">
                                        {s
                                            .soil_types_breakdown
                                            .iter()
                                            .map(|b| {
                                                view! {
                                                    <li>
                                                        {b.soil_type.clone()} ": " {b.count} " ("
                                                        {format!("{:.1}", b.percentage)} "%)"
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                                .into_any()
                        }
                        Err(err) => {
                            view! { <p class="profile-page__error">{err.to_string()}</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
