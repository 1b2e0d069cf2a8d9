//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use camino::Utf8PathBuf;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use tempfile::TempDir;

use crate::Trace;
use crate::domain::{PersonDirectory, TweetService, UserAccountService};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::persistence::{
    JsonDocumentStore, JsonFileTweetRepository, JsonFileUserRepository,
};

/// Clock pinned to [`fixture_now`].
pub struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        fixture_now()
    }
}

/// Instant returned by [`FixtureClock`].
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Handler state backed by JSON documents in a temporary directory.
///
/// The directory lives as long as the context.
pub struct TempStores {
    /// Directory holding `users.json` and `tweets.json`.
    pub dir: TempDir,
    /// Handler state over real services.
    pub state: HttpState,
}

/// Build state over freshly initialised stores.
pub async fn temp_stores() -> TempStores {
    let dir = TempDir::new().expect("temp dir");
    let data_dir = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path");
    let users = JsonFileUserRepository::new(
        JsonDocumentStore::open(&data_dir, "users.json").expect("open users store"),
    );
    let tweets = JsonFileTweetRepository::new(
        JsonDocumentStore::open(&data_dir, "tweets.json").expect("open tweets store"),
    );
    users.initialise_if_missing().await.expect("initialise users");
    tweets
        .initialise_if_missing()
        .await
        .expect("initialise tweets");

    let state = HttpState::new(HttpStatePorts {
        users: Arc::new(UserAccountService::new(Arc::new(users))),
        tweets: Arc::new(TweetService::new(Arc::new(tweets), Arc::new(FixtureClock))),
        persons: PersonDirectory::default(),
    });
    TempStores { dir, state }
}

/// Full application over `state`, wrapped in the trace middleware.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = HealthState::new();
    health.mark_ready();
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(health))
        .wrap(Trace)
        .configure(super::configure)
}
