//! Tweet repository backed by a [`JsonDocumentStore`].
//!
//! [`Tweet`] already serialises its identifier and timestamps as strings and
//! embeds a password-free author, so records are stored as-is.

use async_trait::async_trait;

use crate::domain::ports::{TweetPersistenceError, TweetRepository};
use crate::domain::{Tweet, TweetId};

use super::{JsonDocumentStore, StoreError};

fn map_store_error(error: StoreError) -> TweetPersistenceError {
    match error {
        StoreError::Parse { .. } => TweetPersistenceError::corrupt(error.to_string()),
        other => TweetPersistenceError::storage(other.to_string()),
    }
}

/// JSON-file tweet repository.
pub struct JsonFileTweetRepository {
    store: JsonDocumentStore<Tweet>,
}

impl JsonFileTweetRepository {
    /// Wrap an opened store.
    #[must_use]
    pub fn new(store: JsonDocumentStore<Tweet>) -> Self {
        Self { store }
    }

    /// Create the backing document if it does not yet exist.
    ///
    /// # Errors
    /// Returns the store failure when the document cannot be created.
    pub async fn initialise_if_missing(&self) -> Result<bool, TweetPersistenceError> {
        self.store
            .initialise_if_missing()
            .await
            .map_err(map_store_error)
    }
}

#[async_trait]
impl TweetRepository for JsonFileTweetRepository {
    async fn list_all(&self) -> Result<Vec<Tweet>, TweetPersistenceError> {
        self.store.read_all().await.map_err(map_store_error)
    }

    async fn append(&self, tweet: &Tweet) -> Result<(), TweetPersistenceError> {
        self.store
            .append(tweet.clone())
            .await
            .map_err(map_store_error)
    }

    async fn replace(&self, tweet: &Tweet) -> Result<bool, TweetPersistenceError> {
        let replacement = tweet.clone();
        self.store
            .modify_if(
                move |records| {
                    match records
                        .iter_mut()
                        .find(|record| record.tweet_id == replacement.tweet_id)
                    {
                        Some(record) => {
                            *record = replacement;
                            true
                        }
                        None => false,
                    }
                },
                |replaced| *replaced,
            )
            .await
            .map_err(map_store_error)
    }

    async fn remove(&self, id: &TweetId) -> Result<Option<Tweet>, TweetPersistenceError> {
        let id = *id;
        self.store
            .modify_if(
                move |records| {
                    records
                        .iter()
                        .position(|record| record.tweet_id == id)
                        .map(|index| records.remove(index))
                },
                Option::is_some,
            )
            .await
            .map_err(map_store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{User, UserId};
    use camino::Utf8PathBuf;
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    struct Harness {
        _temp: TempDir,
        repo: JsonFileTweetRepository,
    }

    #[fixture]
    fn harness() -> Harness {
        let temp = TempDir::new().expect("temp dir");
        let data_dir =
            Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp path");
        let store = JsonDocumentStore::open(&data_dir, "tweets.json").expect("open store");
        Harness {
            _temp: temp,
            repo: JsonFileTweetRepository::new(store),
        }
    }

    fn tweet(content: &str) -> Tweet {
        Tweet {
            tweet_id: TweetId::random(),
            content: content.to_owned(),
            created_at: Utc
                .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
            updated_at: None,
            by: User {
                user_id: UserId::random(),
                email: "ada@example.com".to_owned(),
                first_name: "Ada".to_owned(),
                last_name: "Lovelace".to_owned(),
                birth_date: None,
            },
        }
    }

    #[rstest]
    #[tokio::test]
    async fn tweets_round_trip_in_order(harness: Harness) {
        harness.repo.initialise_if_missing().await.expect("initialise");
        let first = tweet("first");
        let second = tweet("second");
        harness.repo.append(&first).await.expect("append first");
        harness.repo.append(&second).await.expect("append second");

        assert_eq!(
            harness.repo.list_all().await.expect("list"),
            vec![first, second]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn replace_updates_matching_tweet(harness: Harness) {
        harness.repo.initialise_if_missing().await.expect("initialise");
        let original = tweet("first");
        harness.repo.append(&original).await.expect("append");

        let mut edited = original.clone();
        edited.content = "edited".to_owned();
        assert!(harness.repo.replace(&edited).await.expect("replace"));
        assert_eq!(harness.repo.list_all().await.expect("list"), vec![edited]);
    }

    #[rstest]
    #[tokio::test]
    async fn remove_missing_tweet_returns_none(harness: Harness) {
        harness.repo.initialise_if_missing().await.expect("initialise");
        assert!(
            harness
                .repo
                .remove(&TweetId::random())
                .await
                .expect("remove")
                .is_none()
        );
    }
}
