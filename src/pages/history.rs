//! Full analysis history with paging.

use leptos::prelude::*;

use crate::components::analysis_result::AnalysisResult;
use crate::components::history_list::{HistoryList, load_history};
use crate::config;
use crate::state::history::HistoryState;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let history = expect_context::<RwSignal<HistoryState>>();

    load_history(history, config::HISTORY_PAGE_SIZE, 0);

    let on_previous = move |_| {
        let (limit, offset) = history.with_untracked(|h| (h.limit, h.offset));
        load_history(history, limit, offset.saturating_sub(limit));
    };

    let on_next = move |_| {
        let (limit, offset, has_next) =
            history.with_untracked(|h| (h.limit, h.offset, h.has_next_page()));
        if has_next {
            load_history(history, limit, offset + limit);
        }
    };

    let page_summary = move || {
        let h = history.get();
        format!("Showing {} of {} analyses", h.items.len(), h.total)
    };

    view! {
        <div class="history-page">
            <h1>"Analysis history"</h1>
            <HistoryList/>
            <div class="history-page__paging">
                <button
                    class="btn btn--small"
                    on:click=on_previous
                    disabled=move || !history.get().has_previous_page()
                >
                    "Previous"
                </button>
                <span class="history-page__summary">{page_summary}</span>
                <button
                    class="btn btn--small"
                    on:click=on_next
                    disabled=move || !history.get().has_next_page()
                >
                    "Next"
                </button>
            </div>
            <AnalysisResult/>
        </div>
    }
}
