//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::session::token;
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;

/// Email/password form. A successful login persists the access token,
/// rebuilds the session from it, and lands on the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move || {
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            notices.update(|n| {
                n.error("Enter your email and password.");
            });
            return;
        }

        pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(resp) => {
                    token::store_access_token(&resp.access_token);
                    session.set(SessionState::from_token(Some(&resp.access_token)));
                    navigate("/dashboard", NavigateOptions::default());
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
            <h1>"Log in"</h1>
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
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Log in" }}
                </button>
            </form>
            <p class="auth-page__alt">
                "No account yet? " <A href="/register">"Sign up"</A>
            </p>
        </div>
    }
}
