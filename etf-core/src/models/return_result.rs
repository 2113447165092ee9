use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net outcome of one market scenario for one ticker.
///
/// `net_fraction` is the total return as a fraction (rounded to four
/// decimal places); `net_dollars` is the same return applied to the
/// invested amount (rounded to cents). Both are derived from the same
/// unrounded value, so they agree to within rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub net_fraction: Decimal,
    pub net_dollars: Decimal,
}

/// Full calculation record for one ticker in one analysis run.
///
/// Owned by the run and collected into a sequence whose order matches the
/// input ticker order. All currency fields are rounded to cents and all
/// fraction fields to four decimal places, once, at construction; nothing
/// downstream recomputes from rounded values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnResult {
    pub ticker: String,

    // Inputs echoed for reporting.
    pub expense_ratio: Decimal,
    pub qualified_mix: Decimal,
    pub trailing_yield: Decimal,

    // Income and tax breakdown.
    pub income_amount: Decimal,
    pub qualified_income: Decimal,
    pub non_qualified_income: Decimal,
    pub tax_on_qualified: Decimal,
    pub tax_on_non_qualified: Decimal,
    pub total_tax: Decimal,
    pub after_tax_income: Decimal,
    pub after_tax_yield: Decimal,

    /// Capital impact of the bear scenario alone, in dollars
    /// (`investment * bear_return`), before income and fees.
    pub bear_capital_dollars: Decimal,

    // Net total return per scenario.
    pub bear: ScenarioOutcome,
    pub bull: ScenarioOutcome,
    pub sideways: ScenarioOutcome,
}
