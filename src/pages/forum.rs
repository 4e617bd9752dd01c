//! Forum post list.

use leptos::prelude::*;
use leptos_router::components::A;

/// All forum posts, newest first as the server returns them.
#[component]
pub fn ForumPage() -> impl IntoView {
    let posts = LocalResource::new(|| crate::net::forum::fetch_posts());

    view! {
        <div class="forum-page">
            <h1>"Forum"</h1>
            <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="forum-page__list">
                                        {list
                                            .posts
                                            .into_iter()
                                            .map(|post| {
                                                view! {
                                                    <li class="forum-page__row">
                                                        <A href=format!(
                                                            "/forum/{}",
                                                            post.id,
                                                        )>{post.title}</A>
                                                        <span class="forum-page__meta">
                                                            {format!(
                                                                "{} replies · {} views",
                                                                post.reply_count,
                                                                post.view_count,
                                                            )}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
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
