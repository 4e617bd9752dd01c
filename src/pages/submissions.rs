//! The visitor's own submission history.

use leptos::prelude::*;

use crate::net::types::Submission;

/// Submission list with verdict, score, and resource usage per row.
#[component]
pub fn SubmissionsPage() -> impl IntoView {
    let submissions =
        LocalResource::new(|| crate::net::submissions::fetch_my_submissions(1, 50));

    view! {
        <div class="submissions-page">
            <h1>"My submissions"</h1>
            <Suspense fallback=move || view! { <p>"Loading submissions..."</p> }>
                {move || {
                    submissions
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="submissions-page__list">
                                        {list
                                            .submissions
                                            .into_iter()
                                            .map(|s| view! { <SubmissionRow submission=s/> })
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

#[component]
fn SubmissionRow(submission: Submission) -> impl IntoView {
    let accepted = submission.status == "Accepted";

    view! {
        <li class="submissions-page__row">
            <span class="submissions-page__problem">
                {format!("#{}", submission.problem_id)}
            </span>
            <span class=move || {
                if accepted {
                    "submissions-page__status submissions-page__status--accepted"
                } else {
                    "submissions-page__status"
                }
            }>{submission.status.clone()}</span>
            <span class="submissions-page__score">{format!("{} pts", submission.score)}</span>
            <span class="submissions-page__usage">
                {format!(
                    "{} ms · {} KiB · {}/{} tests",
                    submission.run_time,
                    submission.memory,
                    submission.passed_tests,
                    submission.total_tests,
                )}
            </span>
            <span class="submissions-page__lang">{submission.language.clone()}</span>
        </li>
    }
}
