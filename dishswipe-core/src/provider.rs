//! Recipe source boundary.
//!
//! The [`DishProvider`] trait abstracts the remote recipe database. The
//! scoring engine never calls it; adapters use it to assemble the candidate
//! list handed to the engine. Implementations may cache, but callers must
//! treat every call as potentially cold.

use thiserror::Error;

use crate::Dish;

/// Errors from [`DishProvider`] calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The service answered with a non-success status.
    #[error("request to {url} failed with status {status}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The request did not complete in time.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The request could not be sent or the connection dropped.
    #[error("network error for {url}: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Description of the failure.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to decode response from {url}: {message}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Description of the failure.
        message: String,
    },
    /// Every partition of a multi-area fetch failed.
    #[error("all {attempted} cuisine partitions failed to load")]
    AllPartitionsFailed {
        /// Number of partitions attempted.
        attempted: usize,
    },
}

/// Fetch dishes from a recipe source.
///
/// # Examples
///
/// ```
/// use dishswipe_core::{Dish, DishProvider, ProviderError};
///
/// struct SingleDish;
///
/// impl DishProvider for SingleDish {
///     fn dishes_by_area(&self, area: &str) -> Result<Vec<Dish>, ProviderError> {
///         Ok(vec![Dish::new("1", "Kare-Kare", "Beef", area)])
///     }
///
///     fn dish_by_id(&self, id: &str) -> Result<Option<Dish>, ProviderError> {
///         Ok((id == "1").then(|| Dish::new("1", "Kare-Kare", "Beef", "Filipino")))
///     }
/// }
///
/// let dishes = SingleDish.dishes_by_area("Filipino")?;
/// assert_eq!(dishes.len(), 1);
/// # Ok::<(), ProviderError>(())
/// ```
pub trait DishProvider: Send + Sync {
    /// Return the dishes listed for a cuisine area.
    ///
    /// # Errors
    /// Returns [`ProviderError`] when the source cannot be reached or its
    /// response cannot be decoded.
    fn dishes_by_area(&self, area: &str) -> Result<Vec<Dish>, ProviderError>;

    /// Look up a single dish, returning `None` when the source has no match.
    ///
    /// # Errors
    /// Returns [`ProviderError`] when the lookup fails.
    fn dish_by_id(&self, id: &str) -> Result<Option<Dish>, ProviderError>;
}
