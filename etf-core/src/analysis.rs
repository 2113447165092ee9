//! Analysis-run orchestration.
//!
//! One run resolves the household's tax rates once, then walks the
//! selected tickers in order, fetching each assumption record through the
//! configured [`AssumptionSource`] and feeding it to the
//! [`ReturnCalculator`]. A ticker whose record cannot be obtained (or
//! fails range validation) is skipped with a recorded warning; the run
//! always continues for the remaining tickers. Result order matches input
//! order so downstream summarization and chart axes are deterministic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::{ReturnCalculator, resolve_tax_rates};
use crate::models::{ReturnResult, TaxRatePair};
use crate::source::AssumptionSource;

/// How the run's tax rates are determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxProfile {
    /// Resolve rates from annual household income and a filing-status
    /// label. An unrecognized label resolves to the documented default
    /// pair rather than failing.
    Household {
        income: Decimal,
        filing_status: String,
    },
    /// Bypass the bracket resolver entirely with an explicit rate pair.
    Explicit(TaxRatePair),
}

impl TaxProfile {
    fn resolve(&self) -> TaxRatePair {
        match self {
            Self::Household {
                income,
                filing_status,
            } => resolve_tax_rates(*income, filing_status),
            Self::Explicit(rates) => *rates,
        }
    }
}

/// Inputs for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub investment: Decimal,
    pub tax_profile: TaxProfile,
    /// Ordered, already-normalized (uppercase) ticker symbols.
    pub tickers: Vec<String>,
}

/// Boundary validation failures that reject the whole request before any
/// ticker is processed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("investment must be positive, got {0}")]
    NonPositiveInvestment(Decimal),
}

/// A ticker excluded from the result sequence, with the cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedTicker {
    pub ticker: String,
    pub reason: String,
}

/// Outcome of one analysis run: the resolved rates, the ordered result
/// sequence, and any per-ticker skips. An empty result sequence is a
/// valid outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub tax_rates: TaxRatePair,
    pub results: Vec<ReturnResult>,
    pub skipped: Vec<SkippedTicker>,
}

impl AnalysisOutcome {
    /// The ticker with the highest net bull-scenario return. Ties keep
    /// the earliest ticker in input order.
    pub fn best_bull(&self) -> Option<&ReturnResult> {
        self.results.iter().fold(None, |best, candidate| match best {
            Some(b) if candidate.bull.net_fraction <= b.bull.net_fraction => best,
            _ => Some(candidate),
        })
    }

    /// The ticker with the lowest net bear-scenario return. Ties keep the
    /// earliest ticker in input order.
    pub fn worst_bear(&self) -> Option<&ReturnResult> {
        self.results.iter().fold(None, |worst, candidate| match worst {
            Some(w) if candidate.bear.net_fraction >= w.bear.net_fraction => worst,
            _ => Some(candidate),
        })
    }
}

/// Runs one full analysis pass.
///
/// # Errors
///
/// Only boundary validation fails the run as a whole
/// ([`AnalysisError::NonPositiveInvestment`]). Per-ticker source failures
/// and out-of-range records downgrade to [`SkippedTicker`] entries.
pub async fn run_analysis(
    request: &AnalysisRequest,
    source: &dyn AssumptionSource,
) -> Result<AnalysisOutcome, AnalysisError> {
    if request.investment <= Decimal::ZERO {
        return Err(AnalysisError::NonPositiveInvestment(request.investment));
    }

    let tax_rates = request.tax_profile.resolve();
    tracing::debug!(
        qualified = %tax_rates.qualified,
        ordinary = %tax_rates.ordinary,
        "resolved tax rates"
    );
    let calculator = ReturnCalculator::new(tax_rates);

    let mut results = Vec::with_capacity(request.tickers.len());
    let mut skipped = Vec::new();

    for ticker in &request.tickers {
        let assumptions = match source.assumptions(ticker).await {
            Ok(assumptions) => assumptions,
            Err(error) => {
                tracing::warn!(ticker = %ticker, %error, "could not fetch data, skipping ticker");
                skipped.push(SkippedTicker {
                    ticker: ticker.clone(),
                    reason: error.to_string(),
                });
                continue;
            }
        };

        // Range validation happens here, at the boundary; the calculator
        // assumes clean input.
        if let Err(error) = assumptions.validate() {
            tracing::warn!(ticker = %ticker, %error, "assumption record out of range, skipping ticker");
            skipped.push(SkippedTicker {
                ticker: ticker.clone(),
                reason: error.to_string(),
            });
            continue;
        }

        results.push(calculator.compute(ticker, request.investment, &assumptions));
    }

    Ok(AnalysisOutcome {
        tax_rates,
        results,
        skipped,
    })
}
