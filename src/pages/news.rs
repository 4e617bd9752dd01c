//! News list page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Published news, summaries only; titles link to the full article.
#[component]
pub fn NewsPage() -> impl IntoView {
    let news = LocalResource::new(|| crate::net::news::fetch_news(1, 20));

    view! {
        <div class="news-page">
            <h1>"News"</h1>
            <Suspense fallback=move || view! { <p>"Loading news..."</p> }>
                {move || {
                    news.get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="news-page__list">
                                        {list
                                            .news
                                            .into_iter()
                                            .map(|article| {
                                                view! {
                                                    <li class="news-page__row">
                                                        <A href=format!(
                                                            "/news/{}",
                                                            article.id,
                                                        )>{article.title}</A>
                                                        <p class="news-page__summary">
                                                            {article.summary}
                                                        </p>
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
