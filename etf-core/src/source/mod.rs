//! Pluggable supply of per-ticker assumption records.
//!
//! The analysis run does not care where assumptions come from: a built-in
//! catalog, user-entered overrides, or a live market-data API. Each supply
//! strategy implements [`AssumptionSource`]; the factory layer picks one
//! by name at startup.

pub mod factory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::EtfAssumptions;

/// Failure to obtain an assumption record.
///
/// Per-ticker variants are recoverable: the analysis run skips the ticker
/// with a warning and continues. Only `Configuration` (a misconfigured
/// source) surfaces before any ticker is processed.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no assumption record for ticker '{0}'")]
    UnknownTicker(String),

    #[error("market data fetch failed for '{ticker}': {reason}")]
    Fetch { ticker: String, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// One supply strategy for ETF assumption records.
///
/// Implementations must be cheap to share across an analysis run and must
/// not hold per-run mutable state. A slow backend (an HTTP API) is
/// expected to bound its own latency with a timeout and report failures
/// through [`SourceError`] so a single ticker can never hang or abort a
/// whole run.
#[async_trait]
pub trait AssumptionSource: Send + Sync + std::fmt::Debug {
    /// Unique, lowercase identifier for this strategy.
    fn source_name(&self) -> &'static str;

    /// The assumption record for `ticker` (already normalized to
    /// uppercase by the caller).
    async fn assumptions(&self, ticker: &str) -> Result<EtfAssumptions, SourceError>;
}

pub use factory::{SourceConfig, SourceFactory, SourceRegistry};
