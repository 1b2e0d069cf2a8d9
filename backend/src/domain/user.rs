//! User shapes for the Twitter-style API.
//!
//! - [`User`]: the public record, safe to return to any caller.
//! - [`UserRegister`]: a [`User`] plus a write-only password; this is what
//!   sign-up accepts and what the record store persists.
//! - [`UserUpdate`]: replacement fields for an existing user.
//! - [`UserLogin`] / [`UserLoginOut`]: credential check and its echo.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::auth::{LOGIN_SUCCESS_MESSAGE, Password, validate_password};

/// Validation errors returned by [`UserId`] constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier text was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier text is not a canonical UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
}

/// Stable user identifier, serialised as a UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from text.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

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

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Public user record.
///
/// ## Invariants
/// - Never carries a password; every response typed as `User` is safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    /// Client-chosen user identifier.
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub user_id: UserId,
    /// Contact email address.
    #[validate(email)]
    #[schema(example = "ada@example.com", format = Email)]
    pub email: String,
    /// Given name.
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "Ada", min_length = 1, max_length = 50)]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "Lovelace", min_length = 1, max_length = 50)]
    pub last_name: String,
    /// Optional birth date.
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "1815-12-10")]
    pub birth_date: Option<NaiveDate>,
}

/// Sign-up payload: every [`User`] field plus a password.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct UserRegister {
    /// Client-chosen user identifier.
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub user_id: UserId,
    /// Contact email address.
    #[validate(email)]
    #[schema(example = "ada@example.com", format = Email)]
    pub email: String,
    /// Given name.
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "Ada", min_length = 1, max_length = 50)]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "Lovelace", min_length = 1, max_length = 50)]
    pub last_name: String,
    /// Optional birth date.
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "1815-12-10")]
    pub birth_date: Option<NaiveDate>,
    /// Write-only password, 8 to 64 characters.
    #[validate(custom(function = "validate_password"))]
    #[schema(value_type = String, format = Password, min_length = 8, max_length = 64)]
    pub password: Password,
}

impl UserRegister {
    /// Reassemble a registration from a public record and its secret.
    #[must_use]
    pub fn from_parts(user: User, password: Password) -> Self {
        let User {
            user_id,
            email,
            first_name,
            last_name,
            birth_date,
        } = user;
        Self {
            user_id,
            email,
            first_name,
            last_name,
            birth_date,
            password,
        }
    }

    /// Split into the public record and the secret.
    #[must_use]
    pub fn into_parts(self) -> (User, Password) {
        let Self {
            user_id,
            email,
            first_name,
            last_name,
            birth_date,
            password,
        } = self;
        let user = User {
            user_id,
            email,
            first_name,
            last_name,
            birth_date,
        };
        (user, password)
    }
}

impl From<UserRegister> for User {
    fn from(value: UserRegister) -> Self {
        let (user, _password) = value.into_parts();
        user
    }
}

/// Replacement fields for an existing user; the identifier comes from the path.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserUpdate {
    /// Contact email address.
    #[validate(email)]
    #[schema(example = "ada@example.com", format = Email)]
    pub email: String,
    /// Given name.
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "Ada", min_length = 1, max_length = 50)]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "Lovelace", min_length = 1, max_length = 50)]
    pub last_name: String,
    /// Optional birth date.
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "1815-12-10")]
    pub birth_date: Option<NaiveDate>,
    /// Write-only password, 8 to 64 characters.
    #[validate(custom(function = "validate_password"))]
    #[schema(value_type = String, format = Password, min_length = 8, max_length = 64)]
    pub password: Password,
}

impl UserUpdate {
    /// Bind the update to `user_id`, producing the record to persist.
    #[must_use]
    pub fn into_registration(self, user_id: UserId) -> UserRegister {
        let Self {
            email,
            first_name,
            last_name,
            birth_date,
            password,
        } = self;
        UserRegister {
            user_id,
            email,
            first_name,
            last_name,
            birth_date,
            password,
        }
    }
}

/// Credentials checked by the Twitter-style login.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserLogin {
    /// Email the account was registered with.
    #[validate(email)]
    #[schema(example = "ada@example.com", format = Email)]
    pub email: String,
    /// Password to check against the stored one.
    #[validate(custom(function = "validate_password"))]
    #[schema(value_type = String, format = Password, min_length = 8, max_length = 64)]
    pub password: Password,
}

/// Login echo: the email plus a fixed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserLoginOut {
    /// Email echoed from the request.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Fixed success message.
    #[schema(example = "Login Successfully!")]
    pub message: String,
}

impl UserLoginOut {
    /// Success echo for `email`.
    #[must_use]
    pub fn success(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            message: LOGIN_SUCCESS_MESSAGE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests;
