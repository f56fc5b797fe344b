//! Custom components.

use crate::{context::get_session, error::WebResult, utils};
use catalog_api::LOGIN_ROUTE;
use leptos::prelude::*;
use leptos_router::components::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = get_session();

    let navbar_links = move || {
        let identity = session.identity()?;
        let session = session.clone();
        let view = view! {
            <span class="is-flex is-flex-grow-1"></span>
            <span class="p-3">{format!("Signed in as {}", identity.admin_id)}</span>
            <button class="button is-link p-3" on:click=move |_ev| session.logout()>"Log out"</button>
        };
        Some(view)
    };

    view! {
        <nav class="navbar is-flex is-vcentered">
            <A exact=true href="/">"Home"</A>
            {navbar_links}
        </nav>
    }
}

/// Renders `children` once the session is resolved and its logged in status
/// matches `require_login`, otherwise redirects. Renders nothing while the
/// session is loading.
#[component]
pub fn LoginGuard(children: ChildrenFn, require_login: bool) -> impl IntoView {
    let session = get_session();

    move || {
        let logged_in = session.logged_in()?;
        let view = if logged_in == require_login {
            children().into_any()
        } else {
            let redirect = if require_login {
                let url = leptos_router::hooks::use_url().get();
                let redirect = url.path();
                format!("{LOGIN_ROUTE}?redirect={redirect}")
            } else {
                "/".to_string()
            };
            tracing::info!("Redirecting to {redirect}");
            view! { <Redirect path=redirect /> }.into_any()
        };
        Some(view)
    }
}

#[component]
pub fn ActionView<T, V>(action: Action<T, WebResult<V>>) -> impl IntoView
where
    T: 'static + Send + Sync,
    V: IntoView + Clone + 'static + Send + Sync,
{
    view! {
        <ErrorBoundary fallback={utils::errors_fallback}>
            <div>
                {move || action.value().get()}
            </div>
        </ErrorBoundary>
    }
}
