//! Tax-adjusted return calculator.
//!
//! Combines one ticker's assumption record with an investment amount and a
//! resolved tax-rate pair into a full [`ReturnResult`]. The computation is
//! a fixed sequence of arithmetic steps:
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Dividend income = investment × trailing yield |
//! | 2    | Qualified income = income × qualified mix |
//! | 3    | Non-qualified income = income × (1 − qualified mix) |
//! | 4    | Tax per category, then total tax |
//! | 5    | After-tax income and after-tax yield |
//! | 6    | Per scenario: net return = scenario return + after-tax yield − expense ratio |
//!
//! Currency fields are rounded to cents and fraction fields to four
//! decimal places, once, when the record is built; every later step reads
//! the unrounded intermediates. The two tax categories are rounded before
//! summing so that `total_tax` is exactly the sum of its parts.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use etf_core::calculations::ReturnCalculator;
//! use etf_core::models::{EtfAssumptions, TaxRatePair};
//!
//! let assumptions = EtfAssumptions {
//!     expense_ratio: dec!(0.0006),
//!     qualified_mix: dec!(0.95),
//!     trailing_yield: dec!(0.028),
//!     bear_return: dec!(-0.0045),
//!     bull_return: dec!(0.1760),
//!     sideways_return: dec!(0.0808),
//! };
//! let rates = TaxRatePair { qualified: dec!(0.15), ordinary: dec!(0.32) };
//!
//! let result = ReturnCalculator::new(rates).compute("VYM", dec!(150000), &assumptions);
//!
//! assert_eq!(result.total_tax, dec!(665.70));
//! assert_eq!(result.after_tax_yield, dec!(0.0236));
//! assert_eq!(result.bull.net_fraction, dec!(0.1990));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{round_currency, round_fraction};
use crate::models::{EtfAssumptions, ReturnResult, ScenarioOutcome, TaxRatePair};

/// Calculator for tax-adjusted total returns under the three market
/// scenarios.
///
/// Holds the resolved tax-rate pair so one analysis run resolves rates
/// once and reuses the calculator across tickers. Pure and side-effect
/// free.
///
/// Preconditions are the caller's responsibility: `investment` must be
/// positive and the assumption record range-validated (the analysis
/// boundary does both). The calculator itself does not re-validate.
#[derive(Debug, Clone, Copy)]
pub struct ReturnCalculator {
    tax_rates: TaxRatePair,
}

impl ReturnCalculator {
    pub fn new(tax_rates: TaxRatePair) -> Self {
        Self { tax_rates }
    }

    pub fn tax_rates(&self) -> TaxRatePair {
        self.tax_rates
    }

    /// Computes the full return record for one ticker.
    pub fn compute(
        &self,
        ticker: &str,
        investment: Decimal,
        assumptions: &EtfAssumptions,
    ) -> ReturnResult {
        let income_amount = investment * assumptions.trailing_yield;
        let qualified_income = income_amount * assumptions.qualified_mix;
        let non_qualified_income = income_amount * (Decimal::ONE - assumptions.qualified_mix);

        // Round each category to cents first; the total is then an exact
        // sum of its reported parts.
        let tax_on_qualified = round_currency(qualified_income * self.tax_rates.qualified);
        let tax_on_non_qualified = round_currency(non_qualified_income * self.tax_rates.ordinary);
        let total_tax = tax_on_qualified + tax_on_non_qualified;

        let after_tax_income = income_amount - total_tax;
        let after_tax_yield = after_tax_income / investment;

        let outcome = |scenario_return: Decimal| {
            let net = scenario_return + after_tax_yield - assumptions.expense_ratio;
            ScenarioOutcome {
                net_fraction: round_fraction(net),
                net_dollars: round_currency(investment * net),
            }
        };

        ReturnResult {
            ticker: ticker.to_string(),
            expense_ratio: assumptions.expense_ratio,
            qualified_mix: assumptions.qualified_mix,
            trailing_yield: assumptions.trailing_yield,
            income_amount: round_currency(income_amount),
            qualified_income: round_currency(qualified_income),
            non_qualified_income: round_currency(non_qualified_income),
            tax_on_qualified,
            tax_on_non_qualified,
            total_tax,
            after_tax_income: round_currency(after_tax_income),
            after_tax_yield: round_fraction(after_tax_yield),
            bear_capital_dollars: round_currency(investment * assumptions.bear_return),
            bear: outcome(assumptions.bear_return),
            bull: outcome(assumptions.bull_return),
            sideways: outcome(assumptions.sideways_return),
        }
    }
}
