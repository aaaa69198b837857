//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page shown to signed-out visitors; signed-in users are
/// redirected to the dashboard before this renders.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"SoilAnalyzer"</h1>
            <p class="home-page__tagline">
                "Upload a photo of your soil and get its type, characteristics, \
                 and crop recommendations in seconds."
            </p>
            <div class="home-page__actions">
                <A href="/register">
                    <span class="btn btn--primary">"Get started"</span>
                </A>
                <A href="/login">
                    <span class="btn">"I already have an account"</span>
                </A>
            </div>
        </div>
    }
}
