//! Driving port for tweet use-cases.

use async_trait::async_trait;

use crate::domain::{Error, Tweet, TweetDraft, TweetEdit, TweetId};

/// Tweet publishing and retrieval use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TweetFeed: Send + Sync {
    /// Publish a draft, stamping the creation time when absent.
    async fn publish(&self, draft: TweetDraft) -> Result<Tweet, Error>;

    /// Every tweet, oldest first.
    async fn list(&self) -> Result<Vec<Tweet>, Error>;

    /// One tweet by identifier.
    async fn find(&self, id: &TweetId) -> Result<Tweet, Error>;

    /// Replace a tweet's content and stamp `updated_at`.
    async fn edit(&self, id: &TweetId, edit: TweetEdit) -> Result<Tweet, Error>;

    /// Remove a tweet, returning what was removed.
    async fn delete(&self, id: &TweetId) -> Result<Tweet, Error>;
}
