//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::pages::{
    dashboard::DashboardPage, editor::EditorPage, home::HomePage, sign_in::SignInPage,
    sign_up::SignUpPage,
};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides the auth context, installs the identity bridge once with the
/// startup configuration, and sets up client-side routing. The sign-in and
/// sign-up routes carry wildcards because the provider widget manages its
/// own sub-routes beneath them.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_context(config.clone());

    crate::util::identity::install(&config, auth);

    view! {
        <Title text="Casebook"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=(StaticSegment("sign-in"), WildcardSegment("rest"))
                    view=SignInPage
                />
                <Route
                    path=(StaticSegment("sign-up"), WildcardSegment("rest"))
                    view=SignUpPage
                />
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route
                    path=(StaticSegment("testcases"), StaticSegment("new"))
                    view=EditorPage
                />
            </Routes>
        </Router>
    }
}
