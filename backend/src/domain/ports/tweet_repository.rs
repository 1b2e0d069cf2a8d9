//! Port abstraction for tweet persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Tweet, TweetId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by tweet repository adapters.
    pub enum TweetPersistenceError {
        /// The backing store could not be read or written.
        Storage { message: String } => "tweet store unavailable: {message}",
        /// The backing store holds data that does not decode as tweets.
        Corrupt { message: String } => "tweet store is corrupt: {message}",
    }
}

/// Durable, ordered collection of tweets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TweetRepository: Send + Sync {
    /// Every stored tweet, in insertion order.
    async fn list_all(&self) -> Result<Vec<Tweet>, TweetPersistenceError>;

    /// Append a tweet.
    async fn append(&self, tweet: &Tweet) -> Result<(), TweetPersistenceError>;

    /// Replace the first tweet with the same identifier.
    ///
    /// Returns `false` when no tweet matched.
    async fn replace(&self, tweet: &Tweet) -> Result<bool, TweetPersistenceError>;

    /// Remove the first tweet with `id`, returning it.
    async fn remove(&self, id: &TweetId) -> Result<Option<Tweet>, TweetPersistenceError>;
}
