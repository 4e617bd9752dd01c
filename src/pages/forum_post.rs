//! Single forum post with its reply thread.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::error::ApiError;

/// One post plus the first page of replies, both keyed off the route param.
#[component]
pub fn ForumPostPage() -> impl IntoView {
    let params = use_params_map();
    let post_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    };

    let post = LocalResource::new(move || {
        let id = post_id();
        async move {
            match id {
                Some(id) => crate::net::forum::fetch_post(id).await,
                None => Err(ApiError::Decode("invalid post id".to_owned())),
            }
        }
    });

    let replies = LocalResource::new(move || {
        let id = post_id();
        async move {
            match id {
                Some(id) => crate::net::forum::fetch_replies(id, 1, 50).await,
                None => Err(ApiError::Decode("invalid post id".to_owned())),
            }
        }
    });

    view! {
        <div class="forum-post-page">
            <Suspense fallback=move || view! { <p>"Loading post..."</p> }>
                {move || {
                    post.get()
                        .map(|result| match result {
                            Ok(post) => {
                                view! {
                                    <article class="forum-post-page__post">
                                        <h1>{post.title}</h1>
                                        <p>{post.content}</p>
                                    </article>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="page-error">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
            <h2>"Replies"</h2>
            <Suspense fallback=move || view! { <p>"Loading replies..."</p> }>
                {move || {
                    replies
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="forum-post-page__replies">
                                        {list
                                            .replies
                                            .into_iter()
                                            .map(|reply| {
                                                view! {
                                                    <li class="forum-post-page__reply">
                                                        {reply.content}
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
