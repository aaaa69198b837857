//! Analysis history list with view and delete actions.

use leptos::prelude::*;

use crate::net::api;
use crate::state::history::{HistoryState, delete_feedback};
use crate::state::notice::NoticeState;
use crate::state::upload::UploadState;
use crate::util::browser;

use super::analysis_result::RESULT_ELEMENT_ID;

/// Fetch a history page into the shared state. Failures are logged and
/// leave the previous page in place.
pub fn load_history(history: RwSignal<HistoryState>, limit: u32, offset: u32) {
    history.update(|h| {
        h.loading = true;
        h.limit = limit;
        h.offset = offset;
    });
    leptos::task::spawn_local(async move {
        match api::fetch_history(limit, offset).await {
            Ok(page) => history.update(|h| h.apply_page(page)),
            Err(err) => {
                leptos::logging::warn!("history load failed: {err}");
                history.update(|h| h.loading = false);
            }
        }
    });
}

/// Summary rows for the current history page. Zero results render an
/// explicit empty-state message rather than a bare empty list.
#[component]
pub fn HistoryList() -> impl IntoView {
    let history = expect_context::<RwSignal<HistoryState>>();
    let upload = expect_context::<RwSignal<UploadState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_view = move |id: i64| {
        leptos::task::spawn_local(async move {
            match api::fetch_analysis(id).await {
                Ok(record) => {
                    upload.update(|u| u.result = Some(record));
                    browser::scroll_to(RESULT_ELEMENT_ID);
                }
                Err(err) => {
                    notices.update(|n| {
                        n.error(err.to_string());
                    });
                }
            }
        });
    };

    let on_delete = move |id: i64| {
        if !browser::confirm("Delete this analysis?") {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = api::delete_analysis(id).await;
            let (level, message) = delete_feedback(&result);
            notices.update(|n| {
                n.show(level, message);
            });
            // The list changes only by reloading; a failed delete leaves
            // it exactly as it was.
            if result.is_ok() {
                let (limit, offset) = history.with_untracked(|h| (h.limit, h.offset));
                load_history(history, limit, offset);
            }
        });
    };

    view! {
        <div class="history-list">
            {move || {
                let h = history.get();
                if h.loading && !h.loaded {
                    return view! { <p class="history-list__loading">"Loading history..."</p> }
                        .into_any();
                }
                if h.is_empty_after_load() {
                    return view! { <p class="history-list__empty">"No analyses yet."</p> }
                        .into_any();
                }
                h.items
                    .iter()
                    .map(|item| {
                        let id = item.id;
                        view! {
                            <div class="history-item">
                                <div class="history-item__info">
                                    <p class="history-item__type">{item.soil_type.clone()}</p>
                                    <p class="history-item__date">{item.created_at_display()}</p>
                                    <p class="history-item__confidence">
                                        "Confidence: " {item.confidence_percent_short()} "%"
                                    </p>
                                </div>
                                <div class="history-item__actions">
                                    <button class="btn btn--small" on:click=move |_| on_view(id)>
                                        "View"
                                    </button>
                                    <button
                                        class="btn btn--small btn--danger"
                                        on:click=move |_| on_delete(id)
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
