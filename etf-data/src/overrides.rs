//! Manual override layering.
//!
//! The original workflow lets the user correct individual fields: an
//! expense ratio looked up elsewhere, a qualified mix estimate, or shared
//! bear/bull/sideways assumptions applied to every ticker. This source
//! wraps any inner strategy and patches its records; used without an
//! inner source it starts from the documented defaults, which models pure
//! manual entry.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use etf_core::models::EtfAssumptions;
use etf_core::source::{AssumptionSource, SourceError};

/// Per-ticker manual corrections. `None` keeps the inner source's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerOverrides {
    pub expense_ratio: Option<Decimal>,
    pub qualified_mix: Option<Decimal>,
}

/// Scenario-return assumptions shared by every ticker in the run.
/// `None` keeps the per-ticker value from the inner source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioOverrides {
    pub bear: Option<Decimal>,
    pub bull: Option<Decimal>,
    pub sideways: Option<Decimal>,
}

impl ScenarioOverrides {
    pub fn is_empty(&self) -> bool {
        self.bear.is_none() && self.bull.is_none() && self.sideways.is_none()
    }
}

/// Applies manual overrides on top of an inner source.
#[derive(Debug)]
pub struct OverrideSource {
    inner: Option<Box<dyn AssumptionSource>>,
    per_ticker: HashMap<String, TickerOverrides>,
    scenarios: ScenarioOverrides,
}

impl OverrideSource {
    /// Layer overrides over `inner`.
    pub fn over(inner: Box<dyn AssumptionSource>) -> Self {
        Self {
            inner: Some(inner),
            per_ticker: HashMap::new(),
            scenarios: ScenarioOverrides::default(),
        }
    }

    /// Pure manual entry: every ticker starts from the documented default
    /// record before overrides are applied.
    pub fn manual() -> Self {
        Self {
            inner: None,
            per_ticker: HashMap::new(),
            scenarios: ScenarioOverrides::default(),
        }
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>, overrides: TickerOverrides) -> Self {
        self.per_ticker.insert(ticker.into(), overrides);
        self
    }

    pub fn with_scenarios(mut self, scenarios: ScenarioOverrides) -> Self {
        self.scenarios = scenarios;
        self
    }

    fn apply(&self, ticker: &str, mut assumptions: EtfAssumptions) -> EtfAssumptions {
        if let Some(overrides) = self.per_ticker.get(ticker) {
            if let Some(expense_ratio) = overrides.expense_ratio {
                assumptions.expense_ratio = expense_ratio;
            }
            if let Some(qualified_mix) = overrides.qualified_mix {
                assumptions.qualified_mix = qualified_mix;
            }
        }
        if let Some(bear) = self.scenarios.bear {
            assumptions.bear_return = bear;
        }
        if let Some(bull) = self.scenarios.bull {
            assumptions.bull_return = bull;
        }
        if let Some(sideways) = self.scenarios.sideways {
            assumptions.sideways_return = sideways;
        }
        assumptions
    }
}

#[async_trait]
impl AssumptionSource for OverrideSource {
    fn source_name(&self) -> &'static str {
        "overrides"
    }

    async fn assumptions(&self, ticker: &str) -> Result<EtfAssumptions, SourceError> {
        let base = match &self.inner {
            Some(inner) => inner.assumptions(ticker).await?,
            None => EtfAssumptions::default(),
        };
        Ok(self.apply(ticker, base))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::catalog::StaticCatalogSource;

    use super::*;

    #[tokio::test]
    async fn manual_entry_starts_from_defaults() {
        let source = OverrideSource::manual();

        let assumptions = source.assumptions("ANYTHING").await.expect("manual never fails");

        assert_eq!(assumptions, EtfAssumptions::default());
    }

    #[tokio::test]
    async fn ticker_overrides_patch_only_their_fields() {
        let source = OverrideSource::over(Box::new(StaticCatalogSource)).with_ticker(
            "VYM",
            TickerOverrides {
                expense_ratio: Some(dec!(0.001)),
                qualified_mix: None,
            },
        );

        let assumptions = source.assumptions("VYM").await.expect("known ticker");

        assert_eq!(assumptions.expense_ratio, dec!(0.001));
        // Untouched fields come straight from the catalog.
        assert_eq!(assumptions.qualified_mix, dec!(0.95));
        assert_eq!(assumptions.trailing_yield, dec!(0.028));
    }

    #[tokio::test]
    async fn scenario_overrides_apply_to_every_ticker() {
        let scenarios = ScenarioOverrides {
            bear: Some(dec!(-0.10)),
            bull: Some(dec!(0.15)),
            sideways: None,
        };
        let source =
            OverrideSource::over(Box::new(StaticCatalogSource)).with_scenarios(scenarios);

        let vym = source.assumptions("VYM").await.expect("known");
        let schd = source.assumptions("SCHD").await.expect("known");

        assert_eq!(vym.bear_return, dec!(-0.10));
        assert_eq!(schd.bear_return, dec!(-0.10));
        assert_eq!(vym.bull_return, dec!(0.15));
        // Sideways keeps the per-ticker catalog value.
        assert_eq!(vym.sideways_return, dec!(0.0808));
        assert_eq!(schd.sideways_return, dec!(0.0620));
    }

    #[tokio::test]
    async fn inner_failures_pass_through() {
        let source = OverrideSource::over(Box::new(StaticCatalogSource));

        let err = source.assumptions("UNKNOWN123").await.expect_err("unknown");

        assert!(matches!(err, SourceError::UnknownTicker(_)));
    }
}
