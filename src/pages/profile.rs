//! Profile page for the logged-in account.

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// Account details from the session plus aggregate submission stats fetched
/// from the server. The route guard guarantees a logged-in session here.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let stats = LocalResource::new(|| crate::net::submissions::fetch_stats());

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            {move || {
                session
                    .current_user()
                    .map(|user| {
                        view! {
                            <dl class="profile-page__details">
                                <dt>"Username"</dt>
                                <dd>{user.username.clone()}</dd>
                                <dt>"Nickname"</dt>
                                <dd>{user.nickname.clone()}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email.clone()}</dd>
                                <dt>"School"</dt>
                                <dd>{user.school.clone()}</dd>
                                <dt>"Rating"</dt>
                                <dd>{user.rating}</dd>
                            </dl>
                        }
                    })
            }}
            <h2>"Statistics"</h2>
            <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|result| match result {
                            Ok(stats) => {
                                view! {
                                    <p class="profile-page__stats">
                                        {format!(
                                            "{} solved · {} of {} submissions accepted ({:.0}%)",
                                            stats.solved_problems,
                                            stats.accepted_submissions,
                                            stats.total_submissions,
                                            stats.acceptance_rate * 100.0,
                                        )}
                                    </p>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="page-error">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
