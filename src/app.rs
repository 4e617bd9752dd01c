//! Root application component with routing, the session context, and the
//! per-route access requirements.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    forum::ForumPage, forum_post::ForumPostPage, home::HomePage, login::LoginPage,
    news::NewsPage, news_detail::NewsDetailPage, problem_detail::ProblemDetailPage,
    problems::ProblemsPage, profile::ProfilePage, register::RegisterPage,
    submissions::SubmissionsPage,
};
use crate::routes::{RouteGuard, RouteRequirement};
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the one session store for the process (hydrating it from
/// persistent storage), provides it as context, and declares the route
/// table. Access requirements live here, next to the routes they protect;
/// untagged routes are open to everyone.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new(Arc::new(BrowserStorage));
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/oj-client.css"/>
        <Title text="OpenJudge"/>

        <Router>
            <NavBar/>
            <main class="page-body">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("login")
                        view=|| {
                            view! {
                                <RouteGuard requirement=RouteRequirement::RequiresGuest>
                                    <LoginPage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| {
                            view! {
                                <RouteGuard requirement=RouteRequirement::RequiresGuest>
                                    <RegisterPage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("problems")
                        view=|| {
                            view! {
                                <RouteGuard requirement=RouteRequirement::RequiresAuth>
                                    <ProblemsPage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("problems"), ParamSegment("id"))
                        view=|| {
                            view! {
                                <RouteGuard requirement=RouteRequirement::RequiresAuth>
                                    <ProblemDetailPage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("submissions")
                        view=|| {
                            view! {
                                <RouteGuard requirement=RouteRequirement::RequiresAuth>
                                    <SubmissionsPage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| {
                            view! {
                                <RouteGuard requirement=RouteRequirement::RequiresAuth>
                                    <ProfilePage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route path=StaticSegment("forum") view=ForumPage/>
                    <Route path=(StaticSegment("forum"), ParamSegment("id")) view=ForumPostPage/>
                    <Route path=StaticSegment("news") view=NewsPage/>
                    <Route path=(StaticSegment("news"), ParamSegment("id")) view=NewsDetailPage/>
                </Routes>
            </main>
        </Router>
    }
}
