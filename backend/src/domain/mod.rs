//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the entity shapes used by the API and persistence layers,
//! the use-case services that operate on them, and the ports that connect the
//! two. Each shape documents its serialisation contract in its Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - TraceId: request correlation identifier.
//! - Person family, Location, Login: the tutorial person API.
//! - User family, Tweet family: the Twitter-style API.
//! - PersonDirectory: seeded person lookup.
//! - UserAccountService / TweetService: driving port implementations.

pub mod auth;
pub mod error;
pub mod person;
pub mod person_directory;
pub mod ports;
pub mod trace_id;
pub mod tweet;
pub mod tweet_service;
pub mod user;
pub mod user_account_service;

pub use self::auth::{Login, LoginOut, Password};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::person::{HairColor, Location, Person, PersonBase, PersonOut, PersonWithLocation};
pub use self::person_directory::PersonDirectory;
pub use self::trace_id::TraceId;
pub use self::tweet::{Tweet, TweetDraft, TweetEdit, TweetId};
pub use self::tweet_service::TweetService;
pub use self::user::{
    User, UserId, UserLogin, UserLoginOut, UserRegister, UserUpdate, UserValidationError,
};
pub use self::user_account_service::UserAccountService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use chirp_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
