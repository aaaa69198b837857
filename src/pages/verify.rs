//! Email verification page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::state::notice::NoticeState;

/// Verification-code form. The email is prefilled from the query string
/// when arriving from registration. A resend button requests a fresh
/// code for the entered email.
#[component]
pub fn VerifyPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(query.get_untracked().get("email").unwrap_or_default());
    let code = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move || {
        let email_value = email.get().trim().to_owned();
        let code_value = code.get().trim().to_owned();
        if email_value.is_empty() || code_value.is_empty() {
            notices.update(|n| {
                n.error("Enter your email and the verification code.");
            });
            return;
        }

        pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::verify(&email_value, &code_value).await {
                Ok(resp) => {
                    notices.update(|n| {
                        n.success(resp.message);
                    });
                    navigate("/login", NavigateOptions::default());
                }
                Err(err) => {
                    notices.update(|n| {
                        n.error(err.to_string());
                    });
                }
            }
            pending.set(false);
        });
    };

    let on_resend = move |_| {
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            notices.update(|n| {
                n.error("Enter your email first.");
            });
            return;
        }
        leptos::task::spawn_local(async move {
            match api::resend_code(&email_value).await {
                Ok(resp) => notices.update(|n| {
                    n.info(resp.message);
                }),
                Err(err) => notices.update(|n| {
                    n.error(err.to_string());
                }),
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Verify your email"</h1>
            <p>"We sent a six-digit code to your email address."</p>
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit();
            }>
                <label class="auth-page__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Verification code"
                    <input
                        type="text"
                        inputmode="numeric"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Verifying..." } else { "Verify" }}
                </button>
            </form>
            <button class="btn btn--link" on:click=on_resend>
                "Resend the code"
            </button>
        </div>
    }
}
