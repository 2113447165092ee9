//! Factories wiring the concrete sources into the registry.

use etf_core::source::{
    AssumptionSource, SourceConfig, SourceError, SourceFactory, SourceRegistry,
};

use crate::catalog::StaticCatalogSource;
use crate::quote_api::QuoteApiSource;

/// Builds [`StaticCatalogSource`] for the `static` backend.
pub struct StaticSourceFactory;

impl SourceFactory for StaticSourceFactory {
    fn backend_name(&self) -> &'static str {
        "static"
    }

    fn create(&self, _config: &SourceConfig) -> Result<Box<dyn AssumptionSource>, SourceError> {
        Ok(Box::new(StaticCatalogSource))
    }
}

/// Builds [`QuoteApiSource`] for the `live` backend, honoring the
/// configured API base override.
pub struct LiveSourceFactory;

impl SourceFactory for LiveSourceFactory {
    fn backend_name(&self) -> &'static str {
        "live"
    }

    fn create(&self, config: &SourceConfig) -> Result<Box<dyn AssumptionSource>, SourceError> {
        let source = match &config.api_base {
            Some(base) => QuoteApiSource::with_base_url(base.clone()),
            None => QuoteApiSource::new(),
        };
        Ok(Box::new(source))
    }
}

/// Registers every backend this crate ships.
pub fn register_default_factories(registry: &mut SourceRegistry) {
    registry.register(Box::new(StaticSourceFactory));
    registry.register(Box::new(LiveSourceFactory));
}
