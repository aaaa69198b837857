//! Image selection and analyze action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::history::HistoryState;
use crate::state::notice::NoticeState;
use crate::state::upload::UploadState;

#[cfg(feature = "hydrate")]
use crate::state::upload::{SelectedFile, validate_selection};

use super::history_list::load_history;

/// File picker plus the analyze button and its loading indicator.
///
/// Selection is validated before it replaces the previous one; a
/// rejected file changes nothing. The analyze call requires a present
/// token (else it redirects to login) and a selection (else a message).
#[component]
pub fn UploadPanel() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let history = expect_context::<RwSignal<HistoryState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let mime = file.type_();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            if let Err(err) = validate_selection(&mime, size) {
                notices.update(|n| {
                    n.error(err.to_string());
                });
                return;
            }
            upload.update(|u| {
                u.select(SelectedFile { name: file.name(), mime, size, handle: file });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_analyze = move |_| {
        if !crate::session::token::is_authenticated() {
            navigate("/login", NavigateOptions::default());
            return;
        }
        let Some(selected) = upload.with_untracked(|u| u.selected.clone()) else {
            notices.update(|n| {
                n.error("Choose an image to analyze first.");
            });
            return;
        };

        upload.update(|u| u.analyzing = true);
        leptos::task::spawn_local(async move {
            match api::analyze_image(&selected).await {
                Ok(record) => {
                    upload.update(|u| u.result = Some(record));
                    let (limit, offset) = history.with_untracked(|h| (h.limit, h.offset));
                    load_history(history, limit, offset);
                }
                Err(err) => {
                    notices.update(|n| {
                        n.error(err.to_string());
                    });
                }
            }
            // The loader clears whatever the outcome was.
            upload.update(|u| u.analyzing = false);
        });
    };

    let selected_name = move || {
        upload
            .get()
            .selected
            .map_or_else(|| "No image selected".to_owned(), |f| f.name)
    };

    view! {
        <div class="upload-panel">
            <label class="upload-panel__picker">
                "Soil image (JPG or PNG, up to 10 MB)"
                <input type="file" accept="image/jpeg,image/png" on:change=on_file_change/>
            </label>
            <p class="upload-panel__selected">{selected_name}</p>
            <button
                class="btn btn--primary"
                on:click=on_analyze
                disabled=move || upload.get().analyzing
            >
                "Analyze soil"
            </button>
            <Show when=move || upload.get().analyzing>
                <div class="loader">"Analyzing image..."</div>
            </Show>
        </div>
    }
}
