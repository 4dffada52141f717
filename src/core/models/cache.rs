//! 5-minute in-memory cache for the aggregated catalog.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::sync::Mutex;

use super::error::CatalogError;
use super::fetch;
use super::info::ModelCatalog;
use super::upstream::ModelSource;

pub const DEFAULT_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Source of "now" in Unix seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_else(|e| {
                log::warn!("System time before UNIX epoch: {}", e);
                0
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Empty,
    Fresh,
    Stale,
}

struct CacheEntry {
    catalog: Arc<ModelCatalog>,
    produced_at: i64,
}

/// Owns the upstream source and the single cached catalog.
///
/// The lock is held from the freshness check through the store, so concurrent
/// callers hitting an empty or stale entry share one upstream refresh and
/// nobody observes a half-written entry.
pub struct CatalogCache<S> {
    source: S,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl<S: ModelSource> CatalogCache<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self::with_clock(source, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(source: S, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            clock,
            ttl,
            entry: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current freshness of the stored catalog.
    #[cfg(test)]
    pub async fn state(&self) -> CacheState {
        let entry = self.entry.lock().await;
        self.state_of(entry.as_ref(), self.clock.now())
    }

    /// Return the cached catalog, rebuilding it when empty, stale, or forced.
    ///
    /// A failed rebuild leaves the previous entry in place and returns the error.
    pub async fn get_catalog(
        &self,
        force_refresh: bool,
    ) -> Result<Arc<ModelCatalog>, CatalogError> {
        let mut entry = self.entry.lock().await;
        let now = self.clock.now();
        let state = self.state_of(entry.as_ref(), now);

        if !force_refresh
            && state == CacheState::Fresh
            && let Some(cached) = entry.as_ref()
        {
            return Ok(Arc::clone(&cached.catalog));
        }

        log::info!(
            "Refreshing model catalog (state: {:?}, forced: {})",
            state,
            force_refresh
        );
        let catalog = match fetch::aggregate(&self.source, now).await {
            Ok(catalog) => Arc::new(catalog),
            Err(e) => {
                log::warn!("Model catalog refresh failed: {}", e);
                return Err(e);
            }
        };
        if catalog.is_empty() {
            log::warn!("Model catalog refreshed but upstream listed no models");
        } else {
            log::info!("Model catalog refreshed with {} entries", catalog.len());
        }

        *entry = Some(CacheEntry {
            catalog: Arc::clone(&catalog),
            produced_at: self.clock.now(),
        });
        Ok(catalog)
    }

    fn state_of(&self, entry: Option<&CacheEntry>, now: i64) -> CacheState {
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        match entry {
            None => CacheState::Empty,
            Some(e) if now.saturating_sub(e.produced_at) < ttl => CacheState::Fresh,
            Some(_) => CacheState::Stale,
        }
    }
}
