//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::notice::NoticeState;

/// Username/email/password form. Registration sends a verification code
/// by email, so success moves on to the verify page with the email
/// prefilled.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move || {
        let username_value = username.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            notices.update(|n| {
                n.error("Fill in all the fields.");
            });
            return;
        }

        pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&username_value, &email_value, &password_value).await {
                Ok(resp) => {
                    notices.update(|n| {
                        n.success(resp.message);
                    });
                    navigate(&format!("/verify?email={}", resp.email), NavigateOptions::default());
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

    view! {
        <div class="auth-page">
            <h1>"Create an account"</h1>
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit();
            }>
                <label class="auth-page__label">
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            <p class="auth-page__alt">
                "Already registered? " <A href="/login">"Log in"</A>
            </p>
        </div>
    }
}
