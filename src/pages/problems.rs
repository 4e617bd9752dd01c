//! Problem list page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{Difficulty, Problem};

/// Problem catalog — first page of the list with difficulty and acceptance
/// counts, each row linking to the statement.
#[component]
pub fn ProblemsPage() -> impl IntoView {
    let problems = LocalResource::new(|| crate::net::problems::fetch_problems(1, 50));

    view! {
        <div class="problems-page">
            <h1>"Problems"</h1>
            <Suspense fallback=move || view! { <p>"Loading problems..."</p> }>
                {move || {
                    problems
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="problems-page__list">
                                        {list
                                            .problems
                                            .into_iter()
                                            .map(|p| view! { <ProblemRow problem=p/> })
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

/// One row of the problem table.
#[component]
fn ProblemRow(problem: Problem) -> impl IntoView {
    let difficulty = match problem.difficulty {
        Difficulty::Easy => "easy",
        Difficulty::Medium => "medium",
        Difficulty::Hard => "hard",
    };

    view! {
        <li class="problems-page__row">
            <A href=format!("/problems/{}", problem.id)>{problem.title}</A>
            <span class=format!(
                "problems-page__difficulty problems-page__difficulty--{difficulty}"
            )>{difficulty}</span>
            <span class="problems-page__counts">
                {format!("{} / {}", problem.accepted_count, problem.submit_count)}
            </span>
        </li>
    }
}
