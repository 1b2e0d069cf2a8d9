//! Single-document JSON record store.
//!
//! A [`JsonDocumentStore`] owns one file holding a JSON array of records.
//! Reads decode the whole array; writes re-encode it and replace the file
//! atomically (see [`super::atomic_io`]). An async mutex serialises every
//! read-modify-write cycle in the process, so concurrent appends never lose
//! records. The blocking task performing a cycle owns the mutex guard; a
//! cancelled caller cannot let a second cycle start mid-write.
//!
//! The store never creates its document implicitly. A missing file is a
//! [`StoreError::Read`]; [`JsonDocumentStore::initialise_if_missing`] is the
//! only way to create one.

use std::io;
use std::marker::PhantomData;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::StoreError;
use super::atomic_io::{plain_file_name, write_atomic};

/// JSON array document inside a capability-scoped data directory.
pub struct JsonDocumentStore<T> {
    dir: Arc<Dir>,
    file_name: Utf8PathBuf,
    write_lock: Arc<Mutex<()>>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonDocumentStore<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    /// Open `file_name` inside `data_dir`.
    ///
    /// The directory must exist; the document itself need not.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPath`] when `file_name` is not a plain
    /// file name and [`StoreError::Directory`] when `data_dir` cannot be
    /// opened.
    pub fn open(data_dir: &Utf8Path, file_name: impl Into<Utf8PathBuf>) -> Result<Self, StoreError> {
        let file_name = file_name.into();
        plain_file_name(&file_name)?;
        let dir = Dir::open_ambient_dir(data_dir, ambient_authority()).map_err(|err| {
            StoreError::Directory {
                path: data_dir.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        Ok(Self::from_dir(dir, file_name))
    }

    /// Wrap an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir, file_name: Utf8PathBuf) -> Self {
        Self {
            dir: Arc::new(dir),
            file_name,
            write_lock: Arc::new(Mutex::new(())),
            _records: PhantomData,
        }
    }

    /// Decode every record in the document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] when the file is missing or unreadable
    /// and [`StoreError::Parse`] when it is not a JSON array of `T`.
    pub async fn read_all(&self) -> Result<Vec<T>, StoreError> {
        let dir = Arc::clone(&self.dir);
        let path = self.file_name.clone();
        run_blocking(move || read_document(&dir, &path)).await
    }

    /// Append one record and persist the document.
    ///
    /// # Errors
    ///
    /// Propagates any read, decode, encode, or write failure; the document
    /// is left untouched when one occurs.
    pub async fn append(&self, record: T) -> Result<(), StoreError> {
        self.modify(move |records| records.push(record)).await
    }

    /// Read the document, apply `mutate`, and persist the result.
    ///
    /// The document is rewritten only when `mutate` reports a change by
    /// returning a value for which `changed` is true. Use
    /// [`JsonDocumentStore::modify`] when every call should rewrite.
    ///
    /// The whole cycle runs on a blocking thread that owns the write lock,
    /// so dropping the returned future never releases the lock before the
    /// cycle finishes.
    ///
    /// # Errors
    ///
    /// Propagates any read, decode, encode, or write failure.
    pub async fn modify_if<F, R>(&self, mutate: F, changed: fn(&R) -> bool) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Vec<T>) -> R + Send + 'static,
        R: Send + 'static,
    {
        let guard = Arc::clone(&self.write_lock).lock_owned().await;
        let dir = Arc::clone(&self.dir);
        let path = self.file_name.clone();
        let (outcome, rewritten) = run_blocking(move || {
            let _guard = guard;
            let mut records = read_document(&dir, &path)?;
            let outcome = mutate(&mut records);
            if !changed(&outcome) {
                return Ok((outcome, None));
            }
            let count = records.len();
            let contents = serde_json::to_vec_pretty(&records).map_err(|err| StoreError::Encode {
                message: err.to_string(),
            })?;
            write_atomic(&dir, &path, &contents)?;
            Ok((outcome, Some(count)))
        })
        .await?;
        if let Some(records) = rewritten {
            debug!(document = %self.file_name, records, "store document rewritten");
        }
        Ok(outcome)
    }

    /// Read the document, apply `mutate`, and always persist the result.
    ///
    /// # Errors
    ///
    /// Propagates any read, decode, encode, or write failure.
    pub async fn modify<F, R>(&self, mutate: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Vec<T>) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.modify_if(mutate, |_| true).await
    }

    /// Create the document as an empty array when it does not exist.
    ///
    /// Returns `true` when a new document was written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when the empty document cannot be
    /// written.
    pub async fn initialise_if_missing(&self) -> Result<bool, StoreError> {
        let guard = Arc::clone(&self.write_lock).lock_owned().await;
        let dir = Arc::clone(&self.dir);
        let path = self.file_name.clone();
        let created = run_blocking(move || {
            let _guard = guard;
            if dir.exists(&path) {
                return Ok(false);
            }
            write_atomic(&dir, &path, b"[]")?;
            Ok(true)
        })
        .await?;
        if created {
            info!(document = %self.file_name, "initialised empty store document");
        }
        Ok(created)
    }
}

fn read_document<T: DeserializeOwned>(dir: &Dir, path: &Utf8Path) -> Result<Vec<T>, StoreError> {
    let bytes = dir.read(path).map_err(|err| StoreError::Read {
        path: path.to_path_buf(),
        message: describe_read_error(&err),
    })?;
    serde_json::from_slice(&bytes).map_err(|err| StoreError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn describe_read_error(err: &io::Error) -> String {
    if err.kind() == io::ErrorKind::NotFound {
        "document does not exist".to_owned()
    } else {
        err.to_string()
    }
}

async fn run_blocking<F, R>(work: F) -> Result<R, StoreError>
where
    F: FnOnce() -> Result<R, StoreError> + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| StoreError::Task {
            message: err.to_string(),
        })?
}
