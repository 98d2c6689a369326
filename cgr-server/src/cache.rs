//! Caching layer for route queries.
//!
//! The contact plan is loaded once and never changes while the server runs,
//! so a search result for a given (source, destination) pair stays valid. We
//! cache successful results; errors are always recomputed.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::{error, trace};

use crate::plan::ContactPlan;
use crate::planner::{Planner, RouteQuery, SearchConfig, SearchError, SearchResult};

/// Cached search result.
type RouteEntry = Arc<SearchResult>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 10_000,
        }
    }
}

/// Cache of search results keyed by query.
pub struct RouteCache {
    routes: MokaCache<RouteQuery, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Get a cached result.
    pub async fn get(&self, query: &RouteQuery) -> Option<RouteEntry> {
        self.routes.get(query).await
    }

    /// Insert a result into the cache.
    pub async fn insert(&self, query: RouteQuery, entry: RouteEntry) {
        self.routes.insert(query, entry).await;
    }

    /// Get cache statistics (for monitoring).
    ///
    /// Moka updates this lazily; call [`RouteCache::sync`] first for an
    /// exact figure.
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Apply pending cache maintenance.
    pub async fn sync(&self) {
        self.routes.run_pending_tasks().await;
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// Planner with caching.
///
/// Owns the shared contact plan and answers queries through a [`RouteCache`].
pub struct CachedPlanner {
    plan: Arc<ContactPlan>,
    config: SearchConfig,
    cache: RouteCache,
}

impl CachedPlanner {
    /// Create a new cached planner.
    pub fn new(plan: Arc<ContactPlan>, config: SearchConfig, cache_config: &CacheConfig) -> Self {
        Self {
            plan,
            config,
            cache: RouteCache::new(cache_config),
        }
    }

    /// Search for a route, using the cache if available.
    pub async fn search(&self, query: RouteQuery) -> Result<RouteEntry, SearchError> {
        if let Some(cached) = self.cache.get(&query).await {
            trace!(source = %query.source, destination = %query.destination, "route cache hit");
            return Ok(cached);
        }

        // Searches are CPU-bound; keep them off the async workers.
        let plan = Arc::clone(&self.plan);
        let config = self.config.clone();
        let result =
            tokio::task::spawn_blocking(move || Planner::new(&plan, &config).search(&query))
                .await
                .map_err(|e| {
                    error!(error = %e, "route search task failed");
                    SearchError::Interrupted
                })??;
        let entry = Arc::new(result);

        self.cache.insert(query, entry.clone()).await;

        Ok(entry)
    }

    /// The contact plan queries run against.
    pub fn plan(&self) -> &ContactPlan {
        &self.plan
    }

    /// Access the cache directly.
    pub fn cache(&self) -> &RouteCache {
        &self.cache
    }
}
