pub mod client;
pub mod session;

use self::{
    client::{Client, ClientBuilder},
    session::Session,
};
use crate::{config::Config, navigation::LocationNavigator};
use leptos::prelude::*;
use std::sync::Arc;

pub fn initialise_context() {
    tracing::trace!("initialising context");

    let config = Config::from_env();
    tracing::info!("Using API at {}", config.base_url);
    let client = ClientBuilder::new(config).build();
    let session = Session::new(client.clone(), Arc::new(LocationNavigator));

    leptos::context::provide_context(client);
    leptos::context::provide_context(session.clone());

    leptos::task::spawn_local(async move {
        session.restore().await;
    });
}

pub fn get_client() -> Client {
    leptos::prelude::expect_context::<Client>()
}

pub fn get_session() -> Session {
    leptos::prelude::expect_context::<Session>()
}
