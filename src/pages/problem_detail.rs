//! Problem statement page with the code submit form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::error::ApiError;
use crate::net::types::Problem;

/// Statement for one problem plus the submission form. Reads the problem ID
/// from the route parameter.
#[component]
pub fn ProblemDetailPage() -> impl IntoView {
    let params = use_params_map();
    let problem_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    };

    let problem = LocalResource::new(move || {
        let id = problem_id();
        async move {
            match id {
                Some(id) => crate::net::problems::fetch_problem(id).await,
                None => Err(ApiError::Decode("invalid problem id".to_owned())),
            }
        }
    });

    view! {
        <div class="problem-page">
            <Suspense fallback=move || view! { <p>"Loading problem..."</p> }>
                {move || {
                    problem
                        .get()
                        .map(|result| match result {
                            Ok(p) => view! { <ProblemView problem=p/> }.into_any(),
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
fn ProblemView(problem: Problem) -> impl IntoView {
    view! {
        <article class="problem-page__statement">
            <h1>{problem.title.clone()}</h1>
            <p class="problem-page__limits">
                {format!(
                    "time limit {} ms · memory limit {} KiB",
                    problem.time_limit,
                    problem.memory_limit,
                )}
            </p>
            <section>
                <h2>"Description"</h2>
                <p>{problem.description.clone()}</p>
            </section>
            <section>
                <h2>"Input"</h2>
                <p>{problem.input_desc.clone()}</p>
            </section>
            <section>
                <h2>"Output"</h2>
                <p>{problem.output_desc.clone()}</p>
            </section>
            <SubmitPanel problem_id=problem.id/>
        </article>
    }
}

/// Code editor stand-in and language picker; hands the code to the judge and
/// jumps to the submission list on success.
#[component]
fn SubmitPanel(problem_id: u64) -> impl IntoView {
    let code = RwSignal::new(String::new());
    let language = RwSignal::new("cpp".to_owned());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = Callback::new(move |()| {
        if code.get().trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let req = crate::net::types::SubmissionCreateRequest {
                    problem_id,
                    code: code.get_untracked(),
                    language: language.get_untracked(),
                };
                match crate::net::submissions::create_submission(&req).await {
                    Ok(_) => {
                        navigate("/submissions", leptos_router::NavigateOptions::default());
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
            let _ = problem_id;
        }
    });

    view! {
        <section class="submit-panel">
            <h2>"Submit"</h2>
            <select
                class="submit-panel__language"
                on:change=move |ev| language.set(event_target_value(&ev))
            >
                <option value="cpp">"C++"</option>
                <option value="c">"C"</option>
                <option value="python">"Python"</option>
                <option value="rust">"Rust"</option>
            </select>
            <textarea
                class="submit-panel__code"
                placeholder="Paste your solution here"
                prop:value=move || code.get()
                on:input=move |ev| code.set(event_target_value(&ev))
            ></textarea>
            <Show when=move || error.get().is_some()>
                <p class="submit-panel__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button
                class="btn btn--primary"
                prop:disabled=move || pending.get()
                on:click=move |_| submit.run(())
            >
                {move || if pending.get() { "Submitting..." } else { "Submit" }}
            </button>
        </section>
    }
}
