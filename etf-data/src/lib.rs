//! Assumption-record sources for the ETF return analyzer.
//!
//! Three supply strategies behind the [`AssumptionSource`] seam:
//!
//! * [`StaticCatalogSource`] - built-in table of well-known dividend ETFs.
//! * [`QuoteApiSource`] - live trailing-yield lookup over HTTP, with
//!   documented defaults for fields the quote API cannot provide.
//! * [`OverrideSource`] - layers per-ticker manual overrides and shared
//!   scenario assumptions over any inner source (or over plain defaults
//!   when used standalone).
//!
//! [`AssumptionSource`]: etf_core::source::AssumptionSource

pub mod catalog;
pub mod factory;
pub mod overrides;
pub mod quote_api;

pub use catalog::StaticCatalogSource;
pub use factory::{LiveSourceFactory, StaticSourceFactory, register_default_factories};
pub use overrides::{OverrideSource, ScenarioOverrides, TickerOverrides};
pub use quote_api::QuoteApiSource;
