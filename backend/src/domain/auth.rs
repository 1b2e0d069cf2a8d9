//! Credentials and login echoes.
//!
//! Passwords are write-only: [`Password`] can be deserialised from a request
//! but deliberately implements neither `Serialize` nor a revealing `Debug`, so
//! no response shape can carry one back to a caller.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};
use zeroize::Zeroizing;

/// Minimum accepted password length in characters.
pub const PASSWORD_MIN: u64 = 8;
/// Maximum accepted password length in characters.
pub const PASSWORD_MAX: u64 = 64;
/// Maximum accepted username length for form logins.
pub const USERNAME_MAX: u64 = 20;
/// Fixed message returned by successful logins.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login Successfully!";

/// Secret supplied by a caller; never echoed back.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a raw secret.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Zeroizing::new(raw.into()))
    }

    /// Borrow the raw secret for persistence or comparison.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Character count used for bounds checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the secret is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Field validator enforcing [`PASSWORD_MIN`]..=[`PASSWORD_MAX`] characters.
///
/// # Errors
/// Returns a `length` validation error carrying the bounds as params.
pub fn validate_password(password: &Password) -> Result<(), ValidationError> {
    let length = u64::try_from(password.len()).unwrap_or(u64::MAX);
    if (PASSWORD_MIN..=PASSWORD_MAX).contains(&length) {
        return Ok(());
    }
    let mut error = ValidationError::new("length");
    error.add_param(Cow::from("min"), &PASSWORD_MIN);
    error.add_param(Cow::from("max"), &PASSWORD_MAX);
    error.message = Some(Cow::from(format!(
        "password must be between {PASSWORD_MIN} and {PASSWORD_MAX} characters"
    )));
    Err(error)
}

/// Form login submitted to the person API.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct Login {
    /// Login name, at most 20 characters.
    #[validate(length(min = 1, max = 20))]
    #[schema(example = "ada", max_length = 20)]
    pub username: String,
    /// Write-only password.
    #[validate(custom(function = "validate_password"))]
    #[schema(value_type = String, format = Password, min_length = 8, max_length = 64)]
    pub password: Password,
}

/// Response shape for [`Login`]: the username plus a fixed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginOut {
    /// Username echoed from the form.
    #[schema(example = "ada")]
    pub username: String,
    /// Fixed success message.
    #[schema(example = "Login Successfully!")]
    pub message: String,
}

impl From<Login> for LoginOut {
    fn from(value: Login) -> Self {
        Self {
            username: value.username,
            message: LOGIN_SUCCESS_MESSAGE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("short", false)]
    #[case("exactly8", true)]
    #[case(&"x".repeat(64), true)]
    #[case(&"x".repeat(65), false)]
    fn password_bounds(#[case] raw: &str, #[case] accepted: bool) {
        let result = validate_password(&Password::new(raw));
        assert_eq!(result.is_ok(), accepted);
    }

    #[rstest]
    fn password_debug_is_redacted() {
        let password = Password::new("hunter2hunter2");
        assert!(!format!("{password:?}").contains("hunter2"));
    }

    #[rstest]
    fn login_out_drops_password() {
        let login = Login {
            username: "ada".to_owned(),
            password: Password::new("correct-horse"),
        };
        let out = LoginOut::from(login);
        let value = serde_json::to_value(&out).expect("serialise login out");
        assert_eq!(value.get("username").and_then(|v| v.as_str()), Some("ada"));
        assert_eq!(
            value.get("message").and_then(|v| v.as_str()),
            Some(LOGIN_SUCCESS_MESSAGE)
        );
        assert!(value.get("password").is_none());
    }

    #[rstest]
    #[case("", false)]
    #[case("ada", true)]
    #[case(&"a".repeat(21), false)]
    fn login_username_bounds(#[case] username: &str, #[case] accepted: bool) {
        let login = Login {
            username: username.to_owned(),
            password: Password::new("correct-horse"),
        };
        assert_eq!(login.validate().is_ok(), accepted);
    }
}
