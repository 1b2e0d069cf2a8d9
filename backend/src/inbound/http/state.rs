//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::PersonDirectory;
use crate::domain::ports::{TweetFeed, UserAccounts};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// User account use-cases.
    pub users: Arc<dyn UserAccounts>,
    /// Tweet feed use-cases.
    pub tweets: Arc<dyn TweetFeed>,
    /// Seeded person identifiers.
    pub persons: PersonDirectory,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User account use-cases.
    pub users: Arc<dyn UserAccounts>,
    /// Tweet feed use-cases.
    pub tweets: Arc<dyn TweetFeed>,
    /// Seeded person identifiers.
    pub persons: Arc<PersonDirectory>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use camino::Utf8Path;
    /// use chirp_backend::domain::{PersonDirectory, TweetService, UserAccountService};
    /// use chirp_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use chirp_backend::outbound::persistence::{
    ///     JsonDocumentStore, JsonFileTweetRepository, JsonFileUserRepository,
    /// };
    ///
    /// let data_dir = Utf8Path::new(".");
    /// let users = JsonFileUserRepository::new(JsonDocumentStore::open(data_dir, "users.json")?);
    /// let tweets = JsonFileTweetRepository::new(JsonDocumentStore::open(data_dir, "tweets.json")?);
    /// let state = HttpState::new(HttpStatePorts {
    ///     users: Arc::new(UserAccountService::new(Arc::new(users))),
    ///     tweets: Arc::new(TweetService::new(Arc::new(tweets), Arc::new(mockable::DefaultClock))),
    ///     persons: PersonDirectory::default(),
    /// });
    /// let _users = state.users.clone();
    /// # Ok::<(), chirp_backend::outbound::persistence::StoreError>(())
    /// ```
    #[must_use]
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            users,
            tweets,
            persons,
        } = ports;
        Self {
            users,
            tweets,
            persons: Arc::new(persons),
        }
    }
}
