//! Tweet domain service implementing the [`TweetFeed`] driving port.
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info};

use crate::domain::ports::{TweetFeed, TweetPersistenceError, TweetRepository};
use crate::domain::{Error, Tweet, TweetDraft, TweetEdit, TweetId};

/// Tweet service backed by a [`TweetRepository`] and a clock.
#[derive(Clone)]
pub struct TweetService<R> {
    tweets: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> TweetService<R> {
    /// Create a new service. `clock` stamps creation and edit times.
    #[must_use]
    pub fn new(tweets: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { tweets, clock }
    }
}

impl<R> TweetService<R>
where
    R: TweetRepository,
{
    fn map_persistence_error(error: TweetPersistenceError) -> Error {
        error!(error = %error, "tweet repository failure");
        Error::internal(format!("tweet repository error: {error}"))
    }

    fn tweet_not_found(id: &TweetId) -> Error {
        Error::not_found(format!("tweet {id} not found"))
    }
}

#[async_trait]
impl<R> TweetFeed for TweetService<R>
where
    R: TweetRepository,
{
    async fn publish(&self, draft: TweetDraft) -> Result<Tweet, Error> {
        let tweet = draft.publish(self.clock.utc());
        self.tweets
            .append(&tweet)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(tweet_id = %tweet.tweet_id, user_id = %tweet.by.user_id, "tweet published");
        Ok(tweet)
    }

    async fn list(&self) -> Result<Vec<Tweet>, Error> {
        self.tweets
            .list_all()
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn find(&self, id: &TweetId) -> Result<Tweet, Error> {
        self.list()
            .await?
            .into_iter()
            .find(|tweet| tweet.tweet_id == *id)
            .ok_or_else(|| Self::tweet_not_found(id))
    }

    async fn edit(&self, id: &TweetId, edit: TweetEdit) -> Result<Tweet, Error> {
        let mut tweet = self.find(id).await?;
        tweet.content = edit.content;
        tweet.updated_at = Some(self.clock.utc());
        let replaced = self
            .tweets
            .replace(&tweet)
            .await
            .map_err(Self::map_persistence_error)?;
        // Deleted between the read and the rewrite.
        if !replaced {
            return Err(Self::tweet_not_found(id));
        }
        info!(tweet_id = %id, "tweet edited");
        Ok(tweet)
    }

    async fn delete(&self, id: &TweetId) -> Result<Tweet, Error> {
        let removed = self
            .tweets
            .remove(id)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Self::tweet_not_found(id))?;
        info!(tweet_id = %id, "tweet deleted");
        Ok(removed)
    }
}
