//! Top navigation bar, reactive to the session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

/// Site-wide navigation bar.
///
/// Shows login/register links for guests and the account's nickname plus a
/// logout button once authenticated. Logout clears the session and returns
/// to the home page.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        session.clear_session();
        navigate("/", NavigateOptions::default());
    });

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">
                <A href="/">"OpenJudge"</A>
            </span>
            <span class="nav-bar__links">
                <A href="/problems">"Problems"</A>
                <A href="/submissions">"Submissions"</A>
                <A href="/forum">"Forum"</A>
                <A href="/news">"News"</A>
            </span>
            <span class="nav-bar__session">
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| {
                        view! {
                            <A href="/login">"Log in"</A>
                            <A href="/register">"Register"</A>
                        }
                    }
                >
                    <span class="nav-bar__user">
                        <A href="/profile">
                            {move || {
                                session.current_user().map(|u| u.nickname).unwrap_or_default()
                            }}
                        </A>
                    </span>
                    <button class="btn" on:click=move |_| on_logout.run(())>
                        "Log out"
                    </button>
                </Show>
            </span>
        </nav>
    }
}
