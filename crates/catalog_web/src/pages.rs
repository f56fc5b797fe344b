//! Top level pages.

use crate::{
    components::*,
    context::{get_client, get_session},
    error::{WebError, WebResult},
};
use leptos::{html::Input, prelude::*};
use send_wrapper::SendWrapper;

#[component]
pub fn Home() -> impl IntoView {
    tracing::info!("Rendering Home");

    view! {
        <LoginGuard require_login=true>
            <Dashboard/>
        </LoginGuard>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let session = get_session();
    let admin_id = move || session.identity().map(|identity| identity.admin_id);

    view! {
        <h2 class="subtitle">"Dashboard"</h2>
        <p>"Signed in as " {admin_id}</p>
    }
}

#[component]
pub fn Login() -> impl IntoView {
    tracing::info!("Rendering Login");

    let client = get_client();
    let session = get_session();

    // form
    let email_ref = NodeRef::<Input>::new();
    let password_ref = NodeRef::<Input>::new();
    let submission_act = Action::new(move |&()| {
        tracing::info!("Signing in");
        let email = email_ref.get().map(|e| e.value()).unwrap_or_default();
        let password = password_ref.get().map(|p| p.value()).unwrap_or_default();
        let client = client.clone();
        let session = session.clone();
        async move {
            if email.is_empty() {
                return Err(WebError::new("Email cannot be empty"));
            }
            if password.is_empty() {
                return Err(WebError::new("Password cannot be empty"));
            }
            let response =
                SendWrapper::new(client.sign_in(email.as_str(), password.as_str())).await?;
            let message = match response.token {
                // the guard redirects once the session resolves
                Some(token) => {
                    SendWrapper::new(session.login(&token)).await;
                    "Signed in".to_string()
                }
                None => response
                    .message
                    .unwrap_or_else(|| "Check your email to continue".to_string()),
            };
            WebResult::Ok(message)
        }
    });

    view! {
        <LoginGuard require_login=false>
            <h2 class="subtitle">"Login"</h2>
            <form>
                <label class="label">
                    "Email"
                    <input class="input" type="email" node_ref=email_ref/>
                </label>
                <label class="label">
                    "Password"
                    <input class="input" type="password" node_ref=password_ref/>
                </label>
                <button class="button mr-2" type="submit" on:click={move |ev| {
                    ev.prevent_default();
                    submission_act.dispatch(());
                }}>
                    "Sign in"
                </button>
            </form>
            <ActionView action=submission_act/>
        </LoginGuard>
    }
}
