//! HTTP-based `DishProvider` backed by TheMealDB.
//!
//! This module provides [`MealDbProvider`], an implementation of the
//! [`DishProvider`] trait that fetches recipes from TheMealDB's JSON API.
//!
//! # Architecture
//!
//! The [`DishProvider`] trait is synchronous so the scoring engine and its
//! callers stay free of async plumbing. This provider bridges the async HTTP
//! calls to the sync interface by blocking on a Tokio runtime internally.
//! Responses are cached in memory per URL for [`MealDbConfig::cache_ttl`].
//!
//! # Example
//!
//! ```no_run
//! use dishswipe_core::DishProvider;
//! use dishswipe_data::MealDbProvider;
//!
//! let provider = MealDbProvider::new()?;
//! let dishes = provider.dishes_by_area("Filipino")?;
//! println!("fetched {} dishes", dishes.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use dishswipe_core::{Dish, DishProvider, ProviderError};
use futures_util::future::join_all;
use log::{debug, warn};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::payload::{AreaEntry, CategoryEntry, CategoryList, MealList, MealRecord, MealSummary};
use crate::gather::{areas_to_fetch, merge_partitions};

/// Error type for [`MealDbProvider`] construction failures.
#[derive(Debug)]
pub enum ProviderBuildError {
    /// The configured base URL does not parse.
    BaseUrl {
        /// Offending URL.
        url: String,
        /// Parser message.
        message: String,
    },
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
}

impl std::fmt::Display for ProviderBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BaseUrl { url, message } => write!(f, "invalid base URL {url}: {message}"),
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
        }
    }
}

impl std::error::Error for ProviderBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BaseUrl { .. } => None,
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}

/// Public TheMealDB endpoint using the shared test key.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Default user agent for TheMealDB requests.
pub const DEFAULT_USER_AGENT: &str = "dishswipe/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default lifetime of a cached response.
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Default number of summaries expanded into full dishes per area.
const DEFAULT_MAX_MEALS_PER_AREA: usize = 15;

/// Configuration for [`MealDbProvider`].
#[derive(Debug, Clone)]
pub struct MealDbConfig {
    /// Base URL for the API, without a trailing endpoint.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// How long a cached response stays fresh.
    pub cache_ttl: Duration,
    /// Maximum number of summaries looked up per area.
    pub max_meals_per_area: usize,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            cache_ttl: DEFAULT_CACHE_TTL,
            max_meals_per_area: DEFAULT_MAX_MEALS_PER_AREA,
        }
    }
}

impl MealDbConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the cache lifetime. A zero duration disables caching.
    #[must_use]
    pub const fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    /// Set how many summaries are expanded per area.
    #[must_use]
    pub const fn with_max_meals_per_area(mut self, max_meals_per_area: usize) -> Self {
        self.max_meals_per_area = max_meals_per_area;
        self
    }
}

#[derive(Debug, Clone)]
struct CachedResponse {
    fetched_at: Instant,
    body: Value,
}

/// HTTP-based dish provider for TheMealDB.
///
/// This provider implements the synchronous [`DishProvider`] trait by
/// internally blocking on asynchronous HTTP requests. It owns a Tokio runtime
/// that is reused across calls.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the provider uses its own
/// stored runtime. When called from within an existing multi-threaded Tokio
/// runtime it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics. Inside a
/// `current_thread` runtime it falls back to its own runtime, which blocks
/// the caller's runtime for the duration of the request.
pub struct MealDbProvider {
    client: Client,
    config: MealDbConfig,
    runtime: Runtime,
    cache: Mutex<HashMap<String, CachedResponse>>,
}

impl std::fmt::Debug for MealDbProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MealDbProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .field("cached", &self.cache_guard().len())
            .finish()
    }
}

impl MealDbProvider {
    /// Create a provider for the public TheMealDB endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new() -> Result<Self, ProviderBuildError> {
        Self::with_config(MealDbConfig::default())
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: MealDbConfig) -> Result<Self, ProviderBuildError> {
        Url::parse(&config.base_url).map_err(|err| ProviderBuildError::BaseUrl {
            url: config.base_url.clone(),
            message: err.to_string(),
        })?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Borrow the active configuration.
    #[must_use]
    pub const fn config(&self) -> &MealDbConfig {
        &self.config
    }

    /// Drop every cached response.
    pub fn clear_cache(&self) {
        self.cache_guard().clear();
    }

    /// List the cuisine areas known to the service.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the request or decoding fails.
    pub fn areas(&self) -> Result<Vec<String>, ProviderError> {
        let list: MealList<AreaEntry> =
            self.block_on(self.fetch_json("list.php", &[("a", "list")]))?;
        Ok(list.into_vec().into_iter().map(|entry| entry.area).collect())
    }

    /// List the dish categories known to the service.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the request or decoding fails.
    pub fn categories(&self) -> Result<Vec<CategoryEntry>, ProviderError> {
        let list: CategoryList = self.block_on(self.fetch_json("categories.php", &[]))?;
        Ok(list.categories.unwrap_or_default())
    }

    /// Fetch a candidate deck for the user's cuisine selection.
    ///
    /// Areas from [`areas_to_fetch`] are requested concurrently and combined
    /// with [`merge_partitions`].
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::AllPartitionsFailed`] when no area loads.
    pub fn gather(&self, selected: &BTreeSet<String>) -> Result<Vec<Dish>, ProviderError> {
        let areas = areas_to_fetch(selected);
        let partitions = self.block_on(join_all(areas.iter().map(|area| self.fetch_area(area))));
        merge_partitions(&areas, partitions)
    }

    fn cache_guard(&self) -> MutexGuard<'_, HashMap<String, CachedResponse>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `future` to completion on a suitable runtime.
    fn block_on<F: Future>(&self, future: F) -> F::Output {
        // block_in_place requires a multi-threaded runtime; for current_thread
        // runtimes we fall back to our own stored runtime.
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }

    /// Build the request URL for an endpoint and its query parameters.
    fn build_url(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Url, ProviderError> {
        let raw = format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&raw).map_err(|err| ProviderError::Network {
            url: raw.clone(),
            message: err.to_string(),
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn cached(&self, url: &str) -> Option<Value> {
        let mut cache = self.cache_guard();
        let entry = cache.get(url)?;
        if entry.fetched_at.elapsed() < self.config.cache_ttl {
            return Some(entry.body.clone());
        }
        cache.remove(url);
        None
    }

    fn store(&self, url: String, body: Value) {
        if self.config.cache_ttl.is_zero() {
            return;
        }
        self.cache_guard().insert(
            url,
            CachedResponse {
                fetched_at: Instant::now(),
                body,
            },
        );
    }

    /// Fetch and decode a JSON endpoint, consulting the cache first.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = self.build_url(endpoint, query)?;
        let key = url.as_str().to_owned();

        let body = if let Some(hit) = self.cached(&key) {
            debug!("cache hit for {key}");
            hit
        } else {
            let fetched = self.fetch_body(url, &key).await?;
            self.store(key.clone(), fetched.clone());
            fetched
        };

        serde_json::from_value(body).map_err(|err| ProviderError::Decode {
            url: key,
            message: err.to_string(),
        })
    }

    async fn fetch_body(&self, url: Url, key: &str) -> Result<Value, ProviderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, key))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, key))?;

        response.json().await.map_err(|err| ProviderError::Decode {
            url: key.to_owned(),
            message: err.to_string(),
        })
    }

    async fn lookup(&self, id: &str) -> Result<Option<Dish>, ProviderError> {
        let list: MealList<MealRecord> = self.fetch_json("lookup.php", &[("i", id)]).await?;
        Ok(list.into_vec().into_iter().next().map(MealRecord::into_dish))
    }

    /// Fetch the summaries for `area` and expand the first few into dishes.
    ///
    /// Lookups that fail or find nothing are logged and dropped.
    async fn fetch_area(&self, area: &str) -> Result<Vec<Dish>, ProviderError> {
        let list: MealList<MealSummary> = self.fetch_json("filter.php", &[("a", area)]).await?;
        let summaries: Vec<MealSummary> = list
            .into_vec()
            .into_iter()
            .take(self.config.max_meals_per_area)
            .collect();
        let lookups = join_all(summaries.iter().map(|summary| self.lookup(&summary.id))).await;

        let mut dishes = Vec::with_capacity(summaries.len());
        for (summary, outcome) in summaries.iter().zip(lookups) {
            match outcome {
                Ok(Some(dish)) => dishes.push(dish),
                Ok(None) => warn!("meal {} in {area} has no details; skipping", summary.id),
                Err(err) => warn!("failed to fetch meal {} in {area}: {err}", summary.id),
            }
        }
        Ok(dishes)
    }

    /// Convert a reqwest error to a `ProviderError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> ProviderError {
        if error.is_timeout() {
            return ProviderError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return ProviderError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
            };
        }

        ProviderError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

impl DishProvider for MealDbProvider {
    fn dishes_by_area(&self, area: &str) -> Result<Vec<Dish>, ProviderError> {
        self.block_on(self.fetch_area(area))
    }

    fn dish_by_id(&self, id: &str) -> Result<Option<Dish>, ProviderError> {
        self.block_on(self.lookup(id))
    }
}
