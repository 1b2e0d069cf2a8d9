//! User account domain service.
//!
//! Implements the [`UserAccounts`] driving port over a [`UserRepository`].
//! Stored registrations keep their password; every value returned from this
//! service is projected to [`User`] first.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{UserAccounts, UserPersistenceError, UserRepository};
use crate::domain::{Error, User, UserId, UserLogin, UserLoginOut, UserRegister, UserUpdate};

/// Message returned when a login does not match any stored user.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid credentials";

/// User account service implementing the driving port.
#[derive(Clone)]
pub struct UserAccountService<R> {
    users: Arc<R>,
}

impl<R> UserAccountService<R> {
    /// Create a new service over `users`.
    #[must_use]
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

impl<R> UserAccountService<R>
where
    R: UserRepository,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        error!(error = %error, "user repository failure");
        Error::internal(format!("user repository error: {error}"))
    }

    fn user_not_found(id: &UserId) -> Error {
        Error::not_found(format!("user {id} not found"))
    }

    async fn stored(&self) -> Result<Vec<UserRegister>, Error> {
        self.users
            .list_all()
            .await
            .map_err(Self::map_persistence_error)
    }
}

#[async_trait]
impl<R> UserAccounts for UserAccountService<R>
where
    R: UserRepository,
{
    async fn register(&self, registration: UserRegister) -> Result<User, Error> {
        self.users
            .append(&registration)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %registration.user_id, "user registered");
        Ok(User::from(registration))
    }

    async fn list(&self) -> Result<Vec<User>, Error> {
        Ok(self.stored().await?.into_iter().map(User::from).collect())
    }

    async fn find(&self, id: &UserId) -> Result<User, Error> {
        self.stored()
            .await?
            .into_iter()
            .find(|user| user.user_id == *id)
            .map(User::from)
            .ok_or_else(|| Self::user_not_found(id))
    }

    async fn update(&self, id: &UserId, update: UserUpdate) -> Result<User, Error> {
        let record = update.into_registration(*id);
        let replaced = self
            .users
            .replace(&record)
            .await
            .map_err(Self::map_persistence_error)?;
        if !replaced {
            return Err(Self::user_not_found(id));
        }
        info!(user_id = %id, "user updated");
        Ok(User::from(record))
    }

    async fn delete(&self, id: &UserId) -> Result<User, Error> {
        let removed = self
            .users
            .remove(id)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Self::user_not_found(id))?;
        info!(user_id = %id, "user deleted");
        Ok(User::from(removed))
    }

    async fn login(&self, credentials: UserLogin) -> Result<UserLoginOut, Error> {
        let matched = self.stored().await?.into_iter().any(|user| {
            user.email == credentials.email
                && user.password.expose() == credentials.password.expose()
        });
        if matched {
            Ok(UserLoginOut::success(credentials.email))
        } else {
            Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE))
        }
    }
}
