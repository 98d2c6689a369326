//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::planner::SearchConfig;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable is set to something unusable
    #[error("{name} has invalid value {value:?}: expected {expected}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Contact plan file to load at start-up.
    pub plan_path: PathBuf,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Route search parameters.
    pub search: SearchConfig,

    /// Route cache parameters.
    pub cache: CacheConfig,
}

impl ServerConfig {
    pub const PLAN_PATH: &'static str = "CONTACT_PLAN";
    pub const BIND_ADDR: &'static str = "CGR_BIND_ADDR";
    pub const MAX_ITERATIONS: &'static str = "CGR_MAX_ITERATIONS";
    pub const STRICT_ENDPOINTS: &'static str = "CGR_STRICT_ENDPOINTS";
    pub const CACHE_TTL_SECS: &'static str = "CGR_CACHE_TTL_SECS";
    pub const CACHE_CAPACITY: &'static str = "CGR_CACHE_CAPACITY";

    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Only `CONTACT_PLAN` is required. The server rejects unknown query
    /// endpoints unless `CGR_STRICT_ENDPOINTS` is `false`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let plan_path = lookup(Self::PLAN_PATH)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(Self::PLAN_PATH))?;

        let bind_addr = parse_var(&lookup, Self::BIND_ADDR, "a socket address")?
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

        let max_iterations =
            parse_var::<NonZeroUsize>(&lookup, Self::MAX_ITERATIONS, "a positive integer")?
                .map(NonZeroUsize::get);
        let strict_endpoints =
            parse_var(&lookup, Self::STRICT_ENDPOINTS, "true or false")?.unwrap_or(true);

        let defaults = CacheConfig::default();
        let ttl = parse_var::<u64>(&lookup, Self::CACHE_TTL_SECS, "a number of seconds")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.ttl);
        let max_capacity = parse_var(&lookup, Self::CACHE_CAPACITY, "an entry count")?
            .unwrap_or(defaults.max_capacity);

        Ok(Self {
            plan_path,
            bind_addr,
            search: SearchConfig::new(max_iterations, strict_endpoints),
            cache: CacheConfig { ttl, max_capacity },
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid {
            name,
            value,
            expected,
        })
}
