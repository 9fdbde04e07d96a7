//! API Handlers
//!
//! HTTP request handlers for the proxy endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, warn};

use crate::cache::{CacheEntry, Clock, MemoryStore, ProxyStats, ResultStore, SystemClock};
use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::models::{CarbonQuery, CarbonResponse, HealthResponse, StatsResponse};
use crate::policy::Allowlist;
use crate::upstream::{CarbonApi, WebsiteCarbonClient};

/// Application state shared across all handlers.
///
/// Every collaborator is injected, so tests can swap the store, the
/// upstream API and the clock.
#[derive(Clone)]
pub struct AppState {
    /// Upstream results keyed by target URL
    pub store: Arc<dyn ResultStore>,
    /// Carbon estimation API
    pub upstream: Arc<dyn CarbonApi>,
    /// Time source for freshness checks
    pub clock: Arc<dyn Clock>,
    /// Hostname policy
    pub allowlist: Arc<Allowlist>,
    /// How long a stored result stays fresh
    pub ttl: Duration,
    /// Hit/miss counters
    pub stats: Arc<ProxyStats>,
}

impl AppState {
    /// Creates a new AppState on the system clock.
    pub fn new(
        store: Arc<dyn ResultStore>,
        upstream: Arc<dyn CarbonApi>,
        allowlist: Allowlist,
        ttl: Duration,
    ) -> Self {
        Self {
            store,
            upstream,
            clock: Arc::new(SystemClock),
            allowlist: Arc::new(allowlist),
            ttl,
            stats: Arc::new(ProxyStats::new()),
        }
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses an in-memory store and the Website Carbon client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let upstream = WebsiteCarbonClient::new(config.upstream_url.clone())?;
        Ok(Self::new(
            Arc::new(MemoryStore::new()),
            Arc::new(upstream),
            config.allowlist.clone(),
            Duration::from_secs(config.cache_ttl),
        ))
    }

    /// Serves `target` from the cache, or fetches and stores it.
    ///
    /// The store lock is not held while upstream is called, so concurrent
    /// misses for one target may both fetch; the last write wins.
    pub async fn carbon(&self, target: &str) -> Result<CarbonResponse> {
        if let Some(entry) = self.store.get(target).await? {
            if entry.is_fresh(self.clock.now(), self.ttl) {
                debug!("Cache hit for {}", target);
                self.stats.record_hit();
                return Ok(CarbonResponse::new(true, &entry.value));
            }
            debug!("Stale entry for {}", target);
        }

        debug!("Cache miss for {}", target);
        self.stats.record_miss();

        let value = match self.upstream.site(target).await {
            Ok(value) => value,
            Err(err) => {
                if matches!(err, ProxyError::Upstream { .. }) {
                    self.stats.record_upstream_error();
                }
                return Err(err);
            }
        };

        let response = CarbonResponse::new(false, &value);
        self.store
            .put(target.to_string(), CacheEntry::new(value, self.clock.now()))
            .await?;

        Ok(response)
    }
}

/// Handler for GET /api/carbon?url=<target>
///
/// Validates the target, applies the allowlist and answers from the
/// cache or the upstream API.
pub async fn carbon_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<CarbonResponse>> {
    let query = CarbonQuery::from_pairs(params);
    let target = query.target()?;

    if let Err(err) = state.allowlist.check(target) {
        warn!("Rejected {}: {}", target, err);
        return Err(err);
    }

    let response = state.carbon(target).await?;
    Ok(Json(response))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let total_entries = state.store.len().await?;

    Ok(Json(StatsResponse::new(
        state.stats.hits(),
        state.stats.misses(),
        state.stats.upstream_errors(),
        total_entries,
    )))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
