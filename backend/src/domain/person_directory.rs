//! Seeded lookup table of known person identifiers.

use std::collections::BTreeSet;

use crate::domain::Error;

/// Identifiers known to the tutorial person API out of the box.
pub const DEFAULT_PERSON_IDS: [u64; 5] = [1, 2, 3, 4, 5];

/// Message returned when a lookup misses.
pub const PERSON_NOT_FOUND_MESSAGE: &str = "This person doesn't exist!";

/// Read-only set of person identifiers, fixed at construction.
///
/// # Examples
/// ```
/// use chirp_backend::domain::PersonDirectory;
///
/// let directory = PersonDirectory::new([7, 9]);
/// assert!(directory.ensure_exists(7).is_ok());
/// assert!(directory.ensure_exists(8).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDirectory {
    known: BTreeSet<u64>,
}

impl PersonDirectory {
    /// Build a directory from a seed dataset.
    #[must_use]
    pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            known: ids.into_iter().collect(),
        }
    }

    /// Whether `person_id` is registered.
    #[must_use]
    pub fn contains(&self, person_id: u64) -> bool {
        self.known.contains(&person_id)
    }

    /// Succeed when `person_id` is registered, otherwise report not found.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::NotFound`] for unknown identifiers.
    pub fn ensure_exists(&self, person_id: u64) -> Result<(), Error> {
        if self.contains(person_id) {
            Ok(())
        } else {
            Err(Error::not_found(PERSON_NOT_FOUND_MESSAGE))
        }
    }
}

impl Default for PersonDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_PERSON_IDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(5)]
    fn default_seed_contains_registered_ids(#[case] id: u64) {
        assert!(PersonDirectory::default().ensure_exists(id).is_ok());
    }

    #[rstest]
    #[case(6)]
    #[case(99)]
    fn unknown_ids_are_not_found(#[case] id: u64) {
        let err = PersonDirectory::default()
            .ensure_exists(id)
            .expect_err("unknown id");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), PERSON_NOT_FOUND_MESSAGE);
    }

    #[rstest]
    fn custom_seed_replaces_default() {
        let directory = PersonDirectory::new([42]);
        assert!(directory.contains(42));
        assert!(!directory.contains(1));
    }
}
