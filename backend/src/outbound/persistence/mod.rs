//! JSON-file persistence adapters.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   on-disk records and domain types. No business logic resides here.
//! - **One document per collection**: each repository owns a
//!   [`JsonDocumentStore`], a JSON array in a capability-scoped directory.
//! - **Atomic rewrites**: every mutation replaces the document through a
//!   synced temporary file and a rename.
//! - **Strongly typed errors**: [`StoreError`] values are mapped to the
//!   domain persistence error types at the adapter boundary.
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use chirp_backend::outbound::persistence::{JsonDocumentStore, JsonFileUserRepository};
//!
//! let store = JsonDocumentStore::open(Utf8Path::new("."), "users.json")?;
//! let repo = JsonFileUserRepository::new(store);
//! # let _ = repo;
//! # Ok::<(), chirp_backend::outbound::persistence::StoreError>(())
//! ```

mod atomic_io;
mod json_document_store;
mod json_tweet_repository;
mod json_user_repository;
mod store_error;

pub use json_document_store::JsonDocumentStore;
pub use json_tweet_repository::JsonFileTweetRepository;
pub use json_user_repository::{JsonFileUserRepository, UserRecord};
pub use store_error::StoreError;
