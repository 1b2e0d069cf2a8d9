//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`UserRepository`], [`TweetRepository`]) are implemented by
//! outbound adapters; driving ports ([`UserAccounts`], [`TweetFeed`]) are
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod tweet_feed;
mod tweet_repository;
mod user_accounts;
mod user_repository;

#[cfg(test)]
pub use tweet_feed::MockTweetFeed;
pub use tweet_feed::TweetFeed;
#[cfg(test)]
pub use tweet_repository::MockTweetRepository;
pub use tweet_repository::{TweetPersistenceError, TweetRepository};
#[cfg(test)]
pub use user_accounts::MockUserAccounts;
pub use user_accounts::UserAccounts;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
