//! Root application component with routing, contexts, and the route
//! guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::nav_bar::NavBar;
use crate::components::notice_banner::NoticeBanner;
use crate::pages::{
    about::AboutPage, analyze::AnalyzePage, dashboard::DashboardPage, history::HistoryPage,
    home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage,
    verify::VerifyPage,
};
use crate::session::guard::{self, GuardAction};
use crate::session::token;
use crate::state::history::HistoryState;
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;
use crate::state::upload::UploadState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, sets up client-side routing, and
/// mounts the route guard so every navigation is checked before its page
/// renders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Rebuild the session from whatever token survived the page load.
    let session = RwSignal::new(SessionState::from_token(token::access_token().as_deref()));
    let upload = RwSignal::new(UploadState::default());
    let history = RwSignal::new(HistoryState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(session);
    provide_context(upload);
    provide_context(history);
    provide_context(notices);

    view! {
        <Stylesheet id="leptos" href="/pkg/soil-analyzer.css"/>
        <Title text="SoilAnalyzer"/>

        <Router>
            <RouteGuard/>
            <NavBar/>
            <NoticeBanner/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("verify") view=VerifyPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("analyze") view=AnalyzePage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Evaluates the route guard on every navigation: unauthenticated users
/// are bounced off protected paths, authenticated users off public-only
/// ones.
#[component]
fn RouteGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        match guard::decide(&path, session.get().authenticated) {
            GuardAction::RedirectToLogin => navigate("/login", NavigateOptions::default()),
            GuardAction::RedirectToDashboard => navigate("/dashboard", NavigateOptions::default()),
            GuardAction::Stay => {}
        }
    });
}
