//! The explicitly constructed chart engine.
//!
//! `BaziEngine` owns its cache: lifecycle (creation, clearing, capacity)
//! is controlled by whoever constructs the engine, not by module state.
//! The engine is `Send + Sync`; share it across threads via `Arc`.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use sizhu_chart::{BaziChart, ChartLabels, compute_chart};

use crate::birth::{BirthData, NormalizedBirth};
use crate::cache::{CacheStats, ChartCache};
use crate::error::BaziError;

/// Engine configuration fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineConfig {
    /// Maximum cached charts.
    pub cache_capacity: usize,
    /// Entry lifetime in seconds.
    pub cache_ttl_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 256,
            cache_ttl_secs: 3600,
        }
    }
}

impl EngineConfig {
    /// Convenience constructor.
    pub fn new(cache_capacity: usize, cache_ttl_secs: u64) -> Self {
        Self {
            cache_capacity,
            cache_ttl_secs,
        }
    }

    fn validate(&self) -> Result<(), BaziError> {
        if self.cache_capacity == 0 {
            return Err(BaziError::InvalidConfig(
                "cache_capacity must be greater than zero",
            ));
        }
        if self.cache_ttl_secs == 0 {
            return Err(BaziError::InvalidConfig(
                "cache_ttl_secs must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Health probe status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
}

/// Operational probe surface. Carries no chart-affecting state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemHealth {
    pub status: HealthStatus,
    pub config: EngineConfig,
    pub cache: CacheStats,
}

/// Chart engine: compute-or-fetch over the pure pipeline.
#[derive(Debug)]
pub struct BaziEngine {
    config: EngineConfig,
    cache: ChartCache,
}

impl BaziEngine {
    /// Create an engine after validating its configuration.
    pub fn new(config: EngineConfig) -> Result<Self, BaziError> {
        config.validate()?;
        let cache = ChartCache::new(config.cache_capacity);
        Ok(Self { config, cache })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute a chart, fetching from the cache when possible.
    ///
    /// Cache-hit and cache-miss paths return structurally equal charts;
    /// the cache is transparent.
    pub fn chart(&self, birth: &BirthData) -> Result<Arc<BaziChart>, BaziError> {
        let normalized = NormalizedBirth::parse(birth)?;
        let fingerprint = normalized.fingerprint();
        if let Some(hit) = self.cache.get(&fingerprint) {
            return Ok(hit);
        }
        let chart = Arc::new(compute_chart(
            &normalized.local,
            normalized.gender,
            normalized.time_known,
        )?);
        self.cache.put(
            fingerprint,
            Arc::clone(&chart),
            Duration::from_secs(self.config.cache_ttl_secs),
        );
        Ok(chart)
    }

    /// Compute a chart without touching the cache.
    pub fn chart_uncached(&self, birth: &BirthData) -> Result<BaziChart, BaziError> {
        let normalized = NormalizedBirth::parse(birth)?;
        Ok(compute_chart(
            &normalized.local,
            normalized.gender,
            normalized.time_known,
        )?)
    }

    /// Compute (or fetch) a chart and render its display labels in the
    /// record's locale. The locale affects only the labels.
    pub fn chart_labels(&self, birth: &BirthData) -> Result<ChartLabels, BaziError> {
        let chart = self.chart(birth)?;
        Ok(chart.labels(birth.locale))
    }

    /// Drop the cached chart for one birth input, if present.
    pub fn invalidate(&self, birth: &BirthData) -> Result<bool, BaziError> {
        let normalized = NormalizedBirth::parse(birth)?;
        Ok(self.cache.invalidate(&normalized.fingerprint()))
    }

    /// Drop all cached charts.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Operational probe: status, config, cache counters.
    pub fn health(&self) -> SystemHealth {
        SystemHealth {
            status: HealthStatus::Ok,
            config: self.config.clone(),
            cache: self.cache.stats(),
        }
    }
}
