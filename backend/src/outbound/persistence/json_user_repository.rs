//! User repository backed by a [`JsonDocumentStore`].

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Password, User, UserId, UserRegister};

use super::{JsonDocumentStore, StoreError};

/// On-disk user record. Identifier and birth date serialise as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    user_id: UserId,
    email: String,
    first_name: String,
    last_name: String,
    #[serde(default)]
    birth_date: Option<NaiveDate>,
    password: String,
}

impl From<&UserRegister> for UserRecord {
    fn from(value: &UserRegister) -> Self {
        Self {
            user_id: value.user_id,
            email: value.email.clone(),
            first_name: value.first_name.clone(),
            last_name: value.last_name.clone(),
            birth_date: value.birth_date,
            password: value.password.expose().to_owned(),
        }
    }
}

impl From<UserRecord> for UserRegister {
    fn from(value: UserRecord) -> Self {
        let user = User {
            user_id: value.user_id,
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            birth_date: value.birth_date,
        };
        UserRegister::from_parts(user, Password::new(value.password))
    }
}

fn map_store_error(error: StoreError) -> UserPersistenceError {
    match error {
        StoreError::Parse { .. } => UserPersistenceError::corrupt(error.to_string()),
        other => UserPersistenceError::storage(other.to_string()),
    }
}

/// JSON-file user repository.
pub struct JsonFileUserRepository {
    store: JsonDocumentStore<UserRecord>,
}

impl JsonFileUserRepository {
    /// Wrap an opened store.
    #[must_use]
    pub fn new(store: JsonDocumentStore<UserRecord>) -> Self {
        Self { store }
    }

    /// Create the backing document if it does not yet exist.
    ///
    /// # Errors
    /// Returns the store failure when the document cannot be created.
    pub async fn initialise_if_missing(&self) -> Result<bool, UserPersistenceError> {
        self.store
            .initialise_if_missing()
            .await
            .map_err(map_store_error)
    }
}

#[async_trait]
impl UserRepository for JsonFileUserRepository {
    async fn list_all(&self) -> Result<Vec<UserRegister>, UserPersistenceError> {
        let records = self.store.read_all().await.map_err(map_store_error)?;
        Ok(records.into_iter().map(UserRegister::from).collect())
    }

    async fn append(&self, user: &UserRegister) -> Result<(), UserPersistenceError> {
        self.store
            .append(UserRecord::from(user))
            .await
            .map_err(map_store_error)
    }

    async fn replace(&self, user: &UserRegister) -> Result<bool, UserPersistenceError> {
        let replacement = UserRecord::from(user);
        self.store
            .modify_if(
                move |records| {
                    let slot = records
                        .iter_mut()
                        .find(|record| record.user_id == replacement.user_id);
                    match slot {
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

    async fn remove(&self, id: &UserId) -> Result<Option<UserRegister>, UserPersistenceError> {
        let id = *id;
        let removed = self
            .store
            .modify_if(
                move |records| {
                    records
                        .iter()
                        .position(|record| record.user_id == id)
                        .map(|index| records.remove(index))
                },
                Option::is_some,
            )
            .await
            .map_err(map_store_error)?;
        Ok(removed.map(UserRegister::from))
    }
}
