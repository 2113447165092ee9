//! Built-in assumption catalog.
//!
//! A fixed table of well-known dividend-focused ETFs with hand-maintained
//! assumptions: trailing yield, expense ratio, qualified-dividend mix, and
//! scenario returns. The figures are exploratory estimates for what-if
//! analysis, not live market data.

use async_trait::async_trait;
use rust_decimal_macros::dec;

use etf_core::models::EtfAssumptions;
use etf_core::source::{AssumptionSource, SourceError};

struct CatalogEntry {
    ticker: &'static str,
    assumptions: EtfAssumptions,
}

macro_rules! entry {
    ($ticker:literal, er: $er:expr, mix: $mix:expr, yield: $yld:expr,
     bear: $bear:expr, bull: $bull:expr, sideways: $sideways:expr) => {
        CatalogEntry {
            ticker: $ticker,
            assumptions: EtfAssumptions {
                expense_ratio: $er,
                qualified_mix: $mix,
                trailing_yield: $yld,
                bear_return: $bear,
                bull_return: $bull,
                sideways_return: $sideways,
            },
        }
    };
}

static CATALOG: [CatalogEntry; 8] = [
    entry!("JEPI", er: dec!(0.0035), mix: dec!(0.05), yield: dec!(0.073),
           bear: dec!(-0.0520), bull: dec!(0.0980), sideways: dec!(0.0410)),
    entry!("JEPQ", er: dec!(0.0035), mix: dec!(0.05), yield: dec!(0.094),
           bear: dec!(-0.0780), bull: dec!(0.1240), sideways: dec!(0.0380)),
    entry!("SPYI", er: dec!(0.0068), mix: dec!(0.10), yield: dec!(0.121),
           bear: dec!(-0.0650), bull: dec!(0.1050), sideways: dec!(0.0350)),
    entry!("VYM", er: dec!(0.0006), mix: dec!(0.95), yield: dec!(0.028),
           bear: dec!(-0.0045), bull: dec!(0.1760), sideways: dec!(0.0808)),
    entry!("SCHD", er: dec!(0.0006), mix: dec!(1.00), yield: dec!(0.034),
           bear: dec!(-0.0210), bull: dec!(0.1580), sideways: dec!(0.0620)),
    entry!("DIVO", er: dec!(0.0056), mix: dec!(0.60), yield: dec!(0.047),
           bear: dec!(-0.0380), bull: dec!(0.1320), sideways: dec!(0.0540)),
    entry!("QYLD", er: dec!(0.0061), mix: dec!(0.02), yield: dec!(0.115),
           bear: dec!(-0.0920), bull: dec!(0.0710), sideways: dec!(0.0290)),
    entry!("DGRO", er: dec!(0.0008), mix: dec!(0.92), yield: dec!(0.023),
           bear: dec!(-0.0120), bull: dec!(0.1690), sideways: dec!(0.0750)),
];

/// Source backed by the built-in catalog.
///
/// Tickers not present in the table answer with
/// [`SourceError::UnknownTicker`], which the analysis run downgrades to a
/// per-ticker skip.
#[derive(Debug)]
pub struct StaticCatalogSource;

impl StaticCatalogSource {
    /// Every ticker in the catalog, in table order.
    pub fn tickers() -> Vec<&'static str> {
        CATALOG.iter().map(|entry| entry.ticker).collect()
    }
}

#[async_trait]
impl AssumptionSource for StaticCatalogSource {
    fn source_name(&self) -> &'static str {
        "static"
    }

    async fn assumptions(&self, ticker: &str) -> Result<EtfAssumptions, SourceError> {
        CATALOG
            .iter()
            .find(|entry| entry.ticker.eq_ignore_ascii_case(ticker))
            .map(|entry| entry.assumptions.clone())
            .ok_or_else(|| SourceError::UnknownTicker(ticker.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[tokio::test]
    async fn vym_carries_the_reference_assumptions() {
        let assumptions = StaticCatalogSource
            .assumptions("VYM")
            .await
            .expect("VYM is in the catalog");

        assert_eq!(assumptions.expense_ratio, dec!(0.0006));
        assert_eq!(assumptions.qualified_mix, dec!(0.95));
        assert_eq!(assumptions.trailing_yield, dec!(0.028));
        assert_eq!(assumptions.bear_return, dec!(-0.0045));
        assert_eq!(assumptions.bull_return, dec!(0.1760));
        assert_eq!(assumptions.sideways_return, dec!(0.0808));
    }

    #[tokio::test]
    async fn lookup_ignores_ticker_case() {
        let upper = StaticCatalogSource.assumptions("SCHD").await.expect("known");
        let lower = StaticCatalogSource.assumptions("schd").await.expect("known");

        assert_eq!(upper, lower);
    }

    #[tokio::test]
    async fn unknown_ticker_is_reported_as_such() {
        let err = StaticCatalogSource
            .assumptions("UNKNOWN123")
            .await
            .expect_err("not in the catalog");

        assert!(matches!(err, SourceError::UnknownTicker(t) if t == "UNKNOWN123"));
    }

    #[test]
    fn every_catalog_entry_passes_range_validation() {
        for ticker in StaticCatalogSource::tickers() {
            let entry = CATALOG
                .iter()
                .find(|e| e.ticker == ticker)
                .expect("listed ticker exists");

            assert_eq!(entry.assumptions.validate(), Ok(()), "{ticker}");
        }
    }
}
