//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: JSON-file repositories for users and tweets.
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod persistence;
