//! Login page with the credential form feeding the session store.

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// Login form. On success the returned `(user, token)` pair is handed to the
/// session store and the visitor lands on the home page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = Callback::new(move |()| {
        let name = username.get();
        if name.trim().is_empty() || password.get().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let req = crate::net::types::LoginRequest {
                    username: name.trim().to_owned(),
                    password: password.get_untracked(),
                };
                match crate::net::user::login(&req).await {
                    Ok(resp) => {
                        session.set_session(resp.user, resp.token);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        pending.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            let _ = name;
        }
    });

    view! {
        <div class="login-page">
            <h1>"Log in"</h1>
            <form
                class="auth-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="auth-form__label">
                    "Username"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" prop:disabled=move || pending.get()>
                    {move || if pending.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>
        </div>
    }
}
