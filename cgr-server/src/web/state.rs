//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, CachedPlanner};
use crate::plan::ContactPlan;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached route planner over the loaded contact plan
    pub planner: Arc<CachedPlanner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(plan: ContactPlan, config: SearchConfig, cache_config: &CacheConfig) -> Self {
        Self {
            planner: Arc::new(CachedPlanner::new(Arc::new(plan), config, cache_config)),
        }
    }

    /// The loaded contact plan.
    pub fn plan(&self) -> &ContactPlan {
        self.planner.plan()
    }
}
