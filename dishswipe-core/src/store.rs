//! Persistence boundary for preference profiles.

use thiserror::Error;

use crate::PreferenceProfile;

/// Errors from [`PreferenceStore`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading the persisted profile failed.
    #[error("failed to read preferences from {location}")]
    Read {
        /// Human-readable location of the profile, e.g. a file path.
        location: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Writing the profile failed.
    #[error("failed to write preferences to {location}")]
    Write {
        /// Human-readable location of the profile.
        location: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The profile could not be encoded for storage.
    #[error("failed to encode preferences for {location}: {message}")]
    Encode {
        /// Human-readable location of the profile.
        location: String,
        /// Description of the failure.
        message: String,
    },
}

/// Load and save the user's [`PreferenceProfile`].
///
/// `load` must return a fully defaulted profile: missing collections are
/// empty, never absent. Stores that find nothing persisted return a fresh
/// profile rather than an error.
pub trait PreferenceStore {
    /// Load the persisted profile, or a fresh one when none exists.
    ///
    /// # Errors
    /// Returns [`StoreError::Read`] when persisted state exists but cannot be
    /// read.
    fn load(&self) -> Result<PreferenceProfile, StoreError>;

    /// Persist `profile`, replacing any previous state.
    ///
    /// # Errors
    /// Returns [`StoreError::Encode`] or [`StoreError::Write`] when the
    /// profile cannot be written.
    fn save(&self, profile: &PreferenceProfile) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn load(&self) -> Result<PreferenceProfile, StoreError> {
        (**self).load()
    }

    fn save(&self, profile: &PreferenceProfile) -> Result<(), StoreError> {
        (**self).save(profile)
    }
}
