//! JSON-file preference store.

use camino::{Utf8Path, Utf8PathBuf};
use dishswipe_core::{PreferenceProfile, PreferenceStore, StoreError};
use log::warn;

/// Persist a [`PreferenceProfile`] as pretty-printed JSON at a fixed path.
///
/// A missing file loads as a fresh profile. A file that exists but does not
/// decode is treated the same way and logged, so a damaged profile never
/// blocks the user; it is overwritten on the next save.
///
/// # Examples
/// ```no_run
/// use dishswipe_core::PreferenceStore;
/// use dishswipe_data::JsonFilePreferenceStore;
///
/// let store = JsonFilePreferenceStore::new("dishswipe-profile.json");
/// let profile = store.load()?;
/// store.save(&profile)?;
/// # Ok::<(), dishswipe_core::StoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFilePreferenceStore {
    path: Utf8PathBuf,
}

impl JsonFilePreferenceStore {
    /// Store the profile at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the profile file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn load(&self) -> Result<PreferenceProfile, StoreError> {
        let contents =
            dishswipe_fs::read_optional(&self.path).map_err(|source| StoreError::Read {
                location: self.path.to_string(),
                source,
            })?;
        let Some(text) = contents else {
            return Ok(PreferenceProfile::default());
        };
        match serde_json::from_str(&text) {
            Ok(profile) => Ok(profile),
            Err(err) => {
                warn!(
                    "ignoring unreadable preferences at {}: {err}; starting fresh",
                    self.path
                );
                Ok(PreferenceProfile::default())
            }
        }
    }

    fn save(&self, profile: &PreferenceProfile) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(profile).map_err(|err| StoreError::Encode {
            location: self.path.to_string(),
            message: err.to_string(),
        })?;
        dishswipe_fs::write_replacing(&self.path, &json).map_err(|source| StoreError::Write {
            location: self.path.to_string(),
            source,
        })
    }
}
