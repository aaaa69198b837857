//! Flash notice banner with auto-dismiss.

use leptos::prelude::*;

use crate::state::notice::{NoticeLevel, NoticeState};

/// Renders the current flash notice, if any, and dismisses it after a
/// few seconds. Each notice carries an id so a timer started for an
/// older message never clears a newer one.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    Effect::new(move || {
        let Some(id) = notices.get().current.as_ref().map(|n| n.id) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(crate::config::NOTICE_TIMEOUT).await;
                notices.update(|n| n.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="notice-banner">
            {move || {
                notices.get().current.map(|notice| {
                    let class = match notice.level {
                        NoticeLevel::Info => "alert alert--info",
                        NoticeLevel::Success => "alert alert--success",
                        NoticeLevel::Error => "alert alert--error",
                    };
                    view! { <div class=class>{notice.text}</div> }
                })
            }}
        </div>
    }
}
