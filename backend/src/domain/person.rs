//! Person shapes for the tutorial API.
//!
//! Three views of one entity, each a plain data shape with its own field list:
//! - [`Person`]: the write shape, profile fields plus a write-only [`Password`].
//! - [`PersonBase`]: the profile fields alone.
//! - [`PersonOut`]: the read shape returned to callers; never has a password.
//!
//! Projections run `Person -> PersonBase -> PersonOut`.
//!
//! [`Location`] and [`PersonWithLocation`] cover the update endpoint, which
//! merges a person and a location into one response object.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::auth::{Password, validate_password};

/// Enumerated hair colours accepted by the person API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    /// `white`
    White,
    /// `brown`
    Brown,
    /// `black`
    Black,
    /// `blonde`
    Blonde,
    /// `red`
    Red,
}

/// Public profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonBase {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: i32,
    /// Optional hair colour.
    pub hair_color: Option<HairColor>,
    /// Optional marital status.
    pub is_married: Option<bool>,
}

/// Write shape: profile fields plus a write-only password.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct Person {
    /// Given name.
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "Ada", min_length = 1, max_length = 50)]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "Lovelace", min_length = 1, max_length = 50)]
    pub last_name: String,
    /// Age in years, 1 to 115 inclusive.
    #[validate(range(exclusive_min = 0, max = 115))]
    #[schema(example = 36, exclusive_minimum = 0, maximum = 115)]
    pub age: i32,
    /// Optional hair colour.
    #[serde(default)]
    pub hair_color: Option<HairColor>,
    /// Optional marital status.
    #[serde(default)]
    pub is_married: Option<bool>,
    /// Write-only password, 8 to 64 characters.
    #[validate(custom(function = "validate_password"))]
    #[schema(value_type = String, format = Password, min_length = 8, max_length = 64)]
    pub password: Password,
}

impl Person {
    /// Split the write shape into its profile and the secret.
    #[must_use]
    pub fn into_parts(self) -> (PersonBase, Password) {
        let Person {
            first_name,
            last_name,
            age,
            hair_color,
            is_married,
            password,
        } = self;
        let base = PersonBase {
            first_name,
            last_name,
            age,
            hair_color,
            is_married,
        };
        (base, password)
    }
}

/// Read shape returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonOut {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: i32,
    /// Optional hair colour.
    pub hair_color: Option<HairColor>,
    /// Optional marital status.
    pub is_married: Option<bool>,
}

impl From<PersonBase> for PersonOut {
    fn from(value: PersonBase) -> Self {
        let PersonBase {
            first_name,
            last_name,
            age,
            hair_color,
            is_married,
        } = value;
        Self {
            first_name,
            last_name,
            age,
            hair_color,
            is_married,
        }
    }
}

impl From<Person> for PersonOut {
    fn from(value: Person) -> Self {
        let (base, _password) = value.into_parts();
        Self::from(base)
    }
}

/// Where a person lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Location {
    /// City name.
    #[validate(length(min = 1, max = 20))]
    #[schema(example = "London", min_length = 1, max_length = 20)]
    pub city: String,
    /// State or region.
    #[validate(length(min = 1, max = 20))]
    #[schema(example = "England", min_length = 1, max_length = 20)]
    pub state: String,
    /// Country name.
    #[validate(length(min = 1, max = 20))]
    #[schema(example = "United Kingdom", min_length = 1, max_length = 20)]
    pub country: String,
}

/// Merged update response: person fields followed by location fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PersonWithLocation {
    /// Person fields, flattened.
    #[serde(flatten)]
    pub person: PersonOut,
    /// Location fields, flattened.
    #[serde(flatten)]
    pub location: Location,
}

impl PersonWithLocation {
    /// Merge a submitted person and location, dropping the password.
    #[must_use]
    pub fn merge(person: Person, location: Location) -> Self {
        Self {
            person: PersonOut::from(person),
            location,
        }
    }
}
