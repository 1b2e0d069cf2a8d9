//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{UserId, UserRegister};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The backing store could not be read or written.
        Storage { message: String } => "user store unavailable: {message}",
        /// The backing store holds data that does not decode as users.
        Corrupt { message: String } => "user store is corrupt: {message}",
    }
}

/// Durable, ordered collection of registered users.
///
/// Records keep their write-only password so logins can be checked; callers
/// project to [`crate::domain::User`] before anything leaves the domain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored record, in insertion order.
    async fn list_all(&self) -> Result<Vec<UserRegister>, UserPersistenceError>;

    /// Append a record. Duplicates are not checked.
    async fn append(&self, user: &UserRegister) -> Result<(), UserPersistenceError>;

    /// Replace the first record with the same identifier.
    ///
    /// Returns `false` when no record matched.
    async fn replace(&self, user: &UserRegister) -> Result<bool, UserPersistenceError>;

    /// Remove the first record with `id`, returning it.
    async fn remove(&self, id: &UserId) -> Result<Option<UserRegister>, UserPersistenceError>;
}
