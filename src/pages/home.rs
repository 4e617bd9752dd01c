//! Home page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page with entry points into the main areas.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"OpenJudge"</h1>
            <p>"Practice problems, track your submissions, talk shop on the forum."</p>
            <div class="home-page__links">
                <A href="/problems">"Browse problems"</A>
                <A href="/news">"Platform news"</A>
                <A href="/forum">"Forum"</A>
            </div>
        </div>
    }
}
