//! Session context for authentication.
//!
//! The session is resolved from the persisted token: `Unresolved` until
//! [`Session::restore`] runs, `Loading` while the profile is fetched, then
//! `Authenticated` or `Anonymous`. Any profile failure counts as anonymous.

use super::client::Client;
use crate::navigation::Navigator;
use catalog_api::response as res;
use leptos::prelude::*;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub admin_id: String,
}

impl From<res::Profile> for Identity {
    fn from(profile: res::Profile) -> Self {
        Self {
            admin_id: profile.admin_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unresolved,
    Loading,
    Authenticated(Identity),
    Anonymous,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Unresolved | Self::Loading)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct Session {
    client: Client,
    navigator: Arc<dyn Navigator>,
    state: ArcRwSignal<SessionState>,
    // bumped whenever the token changes hands, profile results from an
    // older generation are dropped
    generation: Arc<AtomicU64>,
}

impl Session {
    /// Creates the session and makes it the client's 401 handler.
    pub fn new(client: Client, navigator: Arc<dyn Navigator>) -> Self {
        let session = Self {
            client,
            navigator,
            state: ArcRwSignal::new(SessionState::Unresolved),
            generation: Arc::new(AtomicU64::new(0)),
        };

        let state = session.state.clone();
        let generation = session.generation.clone();
        let navigator = session.navigator.clone();
        let login_route = session.client.config().login_route;
        session.client.on_unauthenticated(move || {
            tracing::info!("Session rejected by the server");
            end_session(&state, &generation);
            navigator.navigate(login_route);
        });

        session
    }

    /// Resolves the session from the persisted token, at startup.
    pub async fn restore(&self) -> SessionState {
        if self.client.token().is_none() {
            tracing::info!("No persisted session");
            end_session(&self.state, &self.generation);
            return SessionState::Anonymous;
        }
        let generation = self.begin();
        self.resolve(generation).await
    }

    /// Persists `token` and resolves the identity behind it.
    pub async fn login(&self, token: &str) -> SessionState {
        tracing::info!("Logging in");
        self.client.set_token(token);
        let generation = self.begin();
        self.resolve(generation).await
    }

    /// Clears the token and identity, then leaves for the login page.
    pub fn logout(&self) {
        tracing::info!("Logging out");
        self.client.clear_token();
        end_session(&self.state, &self.generation);
        self.navigator.navigate(self.client.config().login_route);
    }

    /// Fetches the profile again for the currently persisted token.
    pub async fn refresh(&self) -> SessionState {
        self.restore().await
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.with(|state| state.identity().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|state| state.identity().is_some())
    }

    pub fn loading(&self) -> bool {
        self.state.with(SessionState::is_loading)
    }

    /// `None` while the session is still being resolved.
    pub fn logged_in(&self) -> Option<bool> {
        self.state.with(|state| match state {
            SessionState::Unresolved | SessionState::Loading => None,
            SessionState::Authenticated(_) => Some(true),
            SessionState::Anonymous => Some(false),
        })
    }

    fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.set(SessionState::Loading);
        generation
    }

    async fn resolve(&self, generation: u64) -> SessionState {
        let profile = self.client.profile().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("Dropping profile of a superseded session");
            return self.state.get_untracked();
        }
        let state = match profile {
            Ok(profile) => {
                tracing::info!("Current user: {}", profile.admin_id);
                SessionState::Authenticated(profile.into())
            }
            Err(err) => {
                tracing::info!("Current user: none ({err})");
                SessionState::Anonymous
            }
        };
        self.state.set(state.clone());
        state
    }
}

fn end_session(state: &ArcRwSignal<SessionState>, generation: &AtomicU64) {
    generation.fetch_add(1, Ordering::SeqCst);
    state.set(SessionState::Anonymous);
}
