use std::collections::HashMap;

use super::{AssumptionSource, SourceError};

/// Backend-agnostic source configuration.
///
/// `backend` must match the [`SourceFactory::backend_name`] of a
/// registered factory. `api_base` is passed through to that factory
/// unchanged — only network-backed sources read it.
///
/// | backend    | meaning                                   |
/// |------------|-------------------------------------------|
/// | `static`   | built-in assumption catalog               |
/// | `live`     | market-data API lookup                    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Lowercase identifier matching a registered factory.
    pub backend: String,
    /// Optional API base URL override for network-backed sources.
    pub api_base: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            backend: "static".to_string(),
            api_base: None,
        }
    }
}

/// One implementation per assumption backend. Each backend crate exports
/// a unit struct implementing this trait and registers it with a
/// [`SourceRegistry`] at startup.
pub trait SourceFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Build a ready-to-use source from the configuration.
    fn create(&self, config: &SourceConfig) -> Result<Box<dyn AssumptionSource>, SourceError>;
}

/// Registry of [`SourceFactory`] instances, keyed by backend name.
///
/// Typical lifetime:
/// 1. Create with `SourceRegistry::new()`.
/// 2. Call `register` once per known backend.
/// 3. Call `create` when the analysis front-end knows which backend the
///    user picked.
pub struct SourceRegistry {
    factories: HashMap<&'static str, Box<dyn SourceFactory>>,
}

impl SourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory.
    ///
    /// A factory with the same [`SourceFactory::backend_name`] as an
    /// existing one silently replaces it.
    pub fn register(&mut self, factory: Box<dyn SourceFactory>) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory matching `config.backend` and return the
    /// source it produces.
    ///
    /// # Errors
    /// * [`SourceError::Configuration`] — no factory is registered for the
    ///   requested backend name.
    /// * Any error the chosen factory itself returns.
    pub fn create(&self, config: &SourceConfig) -> Result<Box<dyn AssumptionSource>, SourceError> {
        let factory = self.factories.get(config.backend.as_str()).ok_or_else(|| {
            SourceError::Configuration(format!(
                "unknown backend '{}'; available: {:?}",
                config.backend,
                self.available_backends()
            ))
        })?;

        factory.create(config)
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
