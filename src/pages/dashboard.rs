//! Dashboard: analyze a sample and review recent history.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::analysis_result::AnalysisResult;
use crate::components::history_list::{HistoryList, load_history};
use crate::components::upload_panel::UploadPanel;
use crate::config;
use crate::state::history::HistoryState;
use crate::state::session::SessionState;

/// Main page after login. While it is mounted, a background task renews
/// the access token ahead of its expiry; the task is stopped when the
/// page is torn down so no timer outlives it.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let history = expect_context::<RwSignal<HistoryState>>();

    load_history(history, config::HISTORY_PAGE_SIZE, 0);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        if crate::session::token::is_authenticated() {
            let navigate = use_navigate();
            let handle = crate::session::refresh::start(session, move || {
                navigate("/login", NavigateOptions::default());
            });
            on_cleanup(move || handle.stop());
        }
    }

    let greeting = move || {
        session
            .get()
            .user
            .map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.email))
    };

    view! {
        <div class="dashboard-page">
            <h1>{greeting}</h1>

            <section class="dashboard-page__analyze">
                <h2>"Analyze a soil sample"</h2>
                <UploadPanel/>
                <AnalysisResult/>
            </section>

            <section class="dashboard-page__history">
                <h2>"Recent analyses"</h2>
                <HistoryList/>
                <A href="/history">"Full history"</A>
            </section>
        </div>
    }
}
