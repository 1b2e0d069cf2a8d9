//! Atomic document replacement.
//!
//! Contents go to a hidden temporary file in the same directory, are synced,
//! and then renamed over the target. Readers observe either the old document
//! or the new one in full; a shorter rewrite never leaves stale trailing
//! bytes behind.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use super::StoreError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Return the single normal component of `path`, or reject it.
pub(super) fn plain_file_name(path: &Utf8Path) -> Result<&str, StoreError> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(file_name)), None) => Ok(file_name),
        _ => Err(StoreError::InvalidPath {
            path: path.to_path_buf(),
        }),
    }
}

/// Replace `path` inside `dir` with `contents` atomically.
///
/// # Errors
///
/// Returns [`StoreError::InvalidPath`] for nested or special paths and
/// [`StoreError::Write`] when any filesystem step fails.
pub(super) fn write_atomic(dir: &Dir, path: &Utf8Path, contents: &[u8]) -> Result<(), StoreError> {
    let file_name = plain_file_name(path)?;
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(
        ".{}.tmp.{}.{}.{}",
        file_name,
        std::process::id(),
        suffix,
        counter
    );

    write_to_temp_file(dir, &tmp_name, path, contents)?;
    rename_temp_to_target(dir, &tmp_name, file_name, path)?;
    sync_parent_directory(dir);

    Ok(())
}

fn write_to_temp_file(
    dir: &Dir,
    tmp_name: &str,
    target_path: &Utf8Path,
    contents: &[u8],
) -> Result<(), StoreError> {
    let tmp_path = target_path.with_file_name(tmp_name);
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| StoreError::Write {
            path: tmp_path.clone(),
            message: err.to_string(),
        })?;

    let written = file.write_all(contents).and_then(|()| file.sync_all());
    if let Err(err) = written {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(StoreError::Write {
            path: tmp_path,
            message: err.to_string(),
        });
    }

    Ok(())
}

fn rename_temp_to_target(
    dir: &Dir,
    tmp_name: &str,
    target_name: &str,
    target_path: &Utf8Path,
) -> Result<(), StoreError> {
    if let Err(err) = rename_temp_to_target_impl(dir, tmp_name, target_name) {
        drop(dir.remove_file(tmp_name));
        return Err(StoreError::Write {
            path: target_path.to_path_buf(),
            message: err.to_string(),
        });
    }
    Ok(())
}

#[cfg(windows)]
fn rename_temp_to_target_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_temp_to_target_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn sync_parent_directory(parent: &Dir) {
    // Best effort; the rename has already landed.
    drop(parent.open(".").and_then(|dir| dir.sync_all()));
}
