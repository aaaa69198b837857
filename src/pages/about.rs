//! Static "about the system" page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About SoilAnalyzer"</h1>
            <p>
                "SoilAnalyzer classifies soil from a photograph. A trained model \
                 estimates the soil type with a confidence score and pairs it with \
                 a description, key characteristics, and crops suited to it."
            </p>
            <p>
                "Analyses are stored per account: open any past result from the \
                 history page, or delete the ones you no longer need."
            </p>
        </div>
    }
}
