//! Tweet shapes.
//!
//! A [`Tweet`] embeds its author as a [`User`], so the password carried by a
//! registration can never travel with a tweet.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::User;

/// Maximum tweet length in characters.
pub const TWEET_CONTENT_MAX: u64 = 256;

/// Stable tweet identifier, serialised as a UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TweetId(Uuid);

impl TweetId {
    /// Wrap an already parsed UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TweetId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<TweetId> for String {
    fn from(value: TweetId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for TweetId {
    type Error = uuid::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A published tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Tweet {
    /// Client-chosen tweet identifier.
    #[schema(value_type = String, format = Uuid)]
    pub tweet_id: TweetId,
    /// Tweet body.
    #[schema(example = "Hello, world", min_length = 1, max_length = 256)]
    pub content: String,
    /// Publication time.
    pub created_at: DateTime<Utc>,
    /// Time of the last edit, if any.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Public record of the author.
    pub by: User,
}

/// Payload accepted when publishing a tweet.
///
/// `created_at` is optional; the publishing service stamps the current time
/// when it is absent.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TweetDraft {
    /// Client-chosen tweet identifier.
    #[schema(value_type = String, format = Uuid)]
    pub tweet_id: TweetId,
    /// Tweet body, 1 to 256 characters.
    #[validate(length(min = 1, max = 256))]
    #[schema(example = "Hello, world", min_length = 1, max_length = 256)]
    pub content: String,
    /// Publication time; stamped on publish when absent.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Time of the last edit, if any.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Public record of the author.
    #[validate(nested)]
    pub by: User,
}

impl TweetDraft {
    /// Finalise the draft, defaulting `created_at` to `now`.
    #[must_use]
    pub fn publish(self, now: DateTime<Utc>) -> Tweet {
        Tweet {
            tweet_id: self.tweet_id,
            content: self.content,
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at,
            by: self.by,
        }
    }
}

/// Replacement content for an existing tweet.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TweetEdit {
    /// New tweet body, 1 to 256 characters.
    #[validate(length(min = 1, max = 256))]
    #[schema(example = "Edited", min_length = 1, max_length = 256)]
    pub content: String,
}
