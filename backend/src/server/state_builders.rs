//! Helpers for wiring HTTP state from the JSON stores.

use std::sync::Arc;

use chirp_backend::domain::{PersonDirectory, TweetService, UserAccountService};
use chirp_backend::inbound::http::state::{HttpState, HttpStatePorts};
use chirp_backend::outbound::persistence::{
    JsonDocumentStore, JsonFileTweetRepository, JsonFileUserRepository, StoreError,
};
use mockable::DefaultClock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use super::ServerConfig;

fn open_store<T>(config: &ServerConfig, file_name: &str) -> std::io::Result<JsonDocumentStore<T>>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    JsonDocumentStore::open(&config.data_dir, file_name)
        .map_err(|err: StoreError| std::io::Error::other(err))
}

/// Open both store documents and build the handler state over them.
///
/// # Errors
/// Returns [`std::io::Error`] when the data directory cannot be opened or an
/// empty document cannot be created.
pub(super) async fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let users = JsonFileUserRepository::new(open_store(config, &config.users_file)?);
    let tweets = JsonFileTweetRepository::new(open_store(config, &config.tweets_file)?);

    if config.initialise_stores {
        users
            .initialise_if_missing()
            .await
            .map_err(std::io::Error::other)?;
        tweets
            .initialise_if_missing()
            .await
            .map_err(std::io::Error::other)?;
    }
    info!(data_dir = %config.data_dir, "json stores opened");

    Ok(HttpState::new(HttpStatePorts {
        users: Arc::new(UserAccountService::new(Arc::new(users))),
        tweets: Arc::new(TweetService::new(
            Arc::new(tweets),
            Arc::new(DefaultClock),
        )),
        persons: PersonDirectory::new(config.person_ids.iter().copied()),
    }))
}
