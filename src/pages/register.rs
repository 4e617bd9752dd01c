//! Registration page.

use leptos::prelude::*;

/// Account creation form. Registration does not log the visitor in; on
/// success they are sent to the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = Callback::new(move |()| {
        if username.get().trim().is_empty() || email.get().trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let nick = nickname.get_untracked();
                let req = crate::net::types::RegisterRequest {
                    username: username.get_untracked().trim().to_owned(),
                    email: email.get_untracked().trim().to_owned(),
                    password: password.get_untracked(),
                    nickname: (!nick.trim().is_empty()).then(|| nick.trim().to_owned()),
                    school: None,
                    student_id: None,
                };
                match crate::net::user::register(&req).await {
                    Ok(_) => navigate("/login", leptos_router::NavigateOptions::default()),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        pending.set(false);
                    }
                }
            });
        }
    });

    view! {
        <div class="register-page">
            <h1>"Create an account"</h1>
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
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
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
                <label class="auth-form__label">
                    "Nickname (optional)"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || nickname.get()
                        on:input=move |ev| nickname.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" prop:disabled=move || pending.get()>
                    {move || if pending.get() { "Creating..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}
