//! Driving port for the user account use-cases.
//!
//! HTTP handlers depend on this trait rather than on a repository, so every
//! value they receive is already shaped as a public [`User`].

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, UserLogin, UserLoginOut, UserRegister, UserUpdate};

/// Account management use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// Store a new registration and return its public projection.
    async fn register(&self, registration: UserRegister) -> Result<User, Error>;

    /// All registered users, passwords removed.
    async fn list(&self) -> Result<Vec<User>, Error>;

    /// One user by identifier.
    async fn find(&self, id: &UserId) -> Result<User, Error>;

    /// Replace a user's fields.
    async fn update(&self, id: &UserId, update: UserUpdate) -> Result<User, Error>;

    /// Remove a user, returning what was removed.
    async fn delete(&self, id: &UserId) -> Result<User, Error>;

    /// Check credentials against stored registrations.
    async fn login(&self, credentials: UserLogin) -> Result<UserLoginOut, Error>;
}
