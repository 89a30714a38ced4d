//! Public home page.

use leptos::prelude::*;

use crate::components::session_gate::{SignedIn, SignedOut};
use crate::components::user_button::UserButton;

/// Landing page; the only route with no gate. Signed-out visitors get a
/// sign-in link, signed-in users a dashboard link and the user button.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Casebook"</h1>
            <p>"Manage Gherkin test cases from your browser."</p>
            <SignedOut>
                <a class="btn btn--primary" href="/sign-in">
                    "Sign in"
                </a>
            </SignedOut>
            <SignedIn>
                <a class="btn btn--primary" href="/dashboard">
                    "Go to Dashboard"
                </a>
                <UserButton/>
            </SignedIn>
        </div>
    }
}
