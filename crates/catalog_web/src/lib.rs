//! Admin console for the retail catalog.
//!
//! All backend access goes through [`context::client::Client`], and the
//! signed in admin is tracked by [`context::session::Session`].

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod navigation;
pub mod pages;
pub mod storage;
pub mod transport;
pub mod utils;

#[cfg(test)]
mod test_support;

use components::*;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, StaticSegment};
use pages::*;

/// Wraps the content in a basic layout and a final fallback error boundary which should never actually trigger
#[component]
pub fn App() -> impl IntoView {
    tracing::info!("Rendering app");

    context::initialise_context();
    leptos_meta::provide_meta_context();

    let fallback = move |errors: ArcRwSignal<Errors>| {
        errors
            .get_untracked()
            .into_iter()
            .map(|(_key, err)| {
                view! { <div>{format!("Unhandled error: {err}")}</div>}
            })
            .collect_view()
    };

    view! {
        <Title text="Catalog Admin"/>
        <Meta name="description" content="Admin console for the retail catalog"/>
        <div class="section">
            <div class="container">
                <ErrorBoundary fallback>
                    <Content/>
                </ErrorBoundary>
            </div>
        </div>
    }
}

/// Contains the navbar and router
#[component]
pub fn Content() -> impl IntoView {
    view! {
        <Router>
            <Navbar/>
            <main>
                <h1 class="title">"Catalog Admin"</h1>
                <FlatRoutes fallback=|| "Page not found.">
                    <Route
                        path=StaticSegment("/")
                        view=Home
                    />
                    <Route
                        path=StaticSegment("login")
                        view=Login
                    />
                </FlatRoutes>
            </main>
        </Router>
    }
}
