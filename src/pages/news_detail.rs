//! Full news article page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::error::ApiError;

/// One article, keyed off the route param.
#[component]
pub fn NewsDetailPage() -> impl IntoView {
    let params = use_params_map();
    let article_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    };

    let article = LocalResource::new(move || {
        let id = article_id();
        async move {
            match id {
                Some(id) => crate::net::news::fetch_news_detail(id).await,
                None => Err(ApiError::Decode("invalid article id".to_owned())),
            }
        }
    });

    view! {
        <div class="news-detail-page">
            <Suspense fallback=move || view! { <p>"Loading article..."</p> }>
                {move || {
                    article
                        .get()
                        .map(|result| match result {
                            Ok(article) => {
                                view! {
                                    <article class="news-detail-page__article">
                                        <h1>{article.title}</h1>
                                        <p class="news-detail-page__meta">
                                            {article.created_at}
                                        </p>
                                        <p>{article.content}</p>
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
        </div>
    }
}
