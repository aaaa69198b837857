//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::session::token;
use crate::state::session::SessionState;

/// Navigation links plus the logout action. Authenticated users get the
/// app links; everyone else gets login/register.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        token::clear_access_token();
        session.update(SessionState::clear);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <A href="/">
                <span class="nav-bar__brand">"SoilAnalyzer"</span>
            </A>
            <div class="nav-bar__links">
                <Show
                    when=move || session.get().authenticated
                    fallback=|| {
                        view! {
                            <A href="/login">"Log in"</A>
                            <A href="/register">"Sign up"</A>
                            <A href="/about">"About"</A>
                        }
                    }
                >
                    <A href="/dashboard">"Dashboard"</A>
                    <A href="/analyze">"Analyze"</A>
                    <A href="/history">"History"</A>
                    <A href="/profile">"Profile"</A>
                    <A href="/about">"About"</A>
                    <button class="btn btn--link" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
