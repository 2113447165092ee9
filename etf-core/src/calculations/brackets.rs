//! Progressive dividend tax-bracket resolver.
//!
//! Each filing status carries its own schedule of income tiers; a tier
//! maps an inclusive upper income bound to the (qualified, ordinary)
//! dividend rate pair that applies below it. The schedules are a
//! simplified, hard-coded approximation for a single tax year: they ignore
//! deductions, credits, state taxes, NIIT and phase-outs, and several
//! cutoffs intentionally deviate from published IRS schedules. They are
//! preserved tier-for-tier from the source data rather than re-derived.
//!
//! Resolution is total: any income maps to some tier (the top tier is
//! unbounded), and an unrecognized filing status answers with
//! [`TaxRatePair::DEFAULT`] instead of an error.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{FilingStatus, TaxBracket, TaxRatePair};

macro_rules! tier {
    (top, $qualified:expr, $ordinary:expr) => {
        TaxBracket {
            max_income: None,
            qualified_rate: $qualified,
            ordinary_rate: $ordinary,
        }
    };
    ($upper:expr, $qualified:expr, $ordinary:expr) => {
        TaxBracket {
            max_income: Some($upper),
            qualified_rate: $qualified,
            ordinary_rate: $ordinary,
        }
    };
}

static SINGLE: [TaxBracket; 7] = [
    tier!(dec!(48350), dec!(0.00), dec!(0.10)),
    tier!(dec!(48475), dec!(0.00), dec!(0.12)),
    tier!(dec!(103350), dec!(0.15), dec!(0.22)),
    tier!(dec!(197300), dec!(0.15), dec!(0.24)),
    tier!(dec!(250525), dec!(0.15), dec!(0.32)),
    tier!(dec!(533400), dec!(0.15), dec!(0.35)),
    tier!(top, dec!(0.20), dec!(0.37)),
];

static MARRIED_FILING_JOINTLY: [TaxBracket; 7] = [
    tier!(dec!(96700), dec!(0.00), dec!(0.10)),
    tier!(dec!(96950), dec!(0.00), dec!(0.12)),
    tier!(dec!(206700), dec!(0.15), dec!(0.22)),
    tier!(dec!(394600), dec!(0.15), dec!(0.24)),
    tier!(dec!(501050), dec!(0.15), dec!(0.32)),
    tier!(dec!(600000), dec!(0.15), dec!(0.35)),
    tier!(top, dec!(0.20), dec!(0.37)),
];

// Shares the Single cutoffs through the fifth tier; only the top of the
// 35% tier differs. A property of the source data, not a derived rule.
static MARRIED_FILING_SEPARATELY: [TaxBracket; 7] = [
    tier!(dec!(48350), dec!(0.00), dec!(0.10)),
    tier!(dec!(48475), dec!(0.00), dec!(0.12)),
    tier!(dec!(103350), dec!(0.15), dec!(0.22)),
    tier!(dec!(197300), dec!(0.15), dec!(0.24)),
    tier!(dec!(250525), dec!(0.15), dec!(0.32)),
    tier!(dec!(300000), dec!(0.15), dec!(0.35)),
    tier!(top, dec!(0.20), dec!(0.37)),
];

static HEAD_OF_HOUSEHOLD: [TaxBracket; 7] = [
    tier!(dec!(64750), dec!(0.00), dec!(0.10)),
    tier!(dec!(64850), dec!(0.00), dec!(0.12)),
    tier!(dec!(103350), dec!(0.15), dec!(0.22)),
    tier!(dec!(197300), dec!(0.15), dec!(0.24)),
    tier!(dec!(250500), dec!(0.15), dec!(0.32)),
    tier!(dec!(566700), dec!(0.15), dec!(0.35)),
    tier!(top, dec!(0.20), dec!(0.37)),
];

/// The bracket schedule for a filing status, ordered by ascending upper
/// bound and terminated by the unbounded top tier.
pub fn schedule(status: FilingStatus) -> &'static [TaxBracket] {
    match status {
        FilingStatus::Single => &SINGLE,
        FilingStatus::MarriedFilingJointly => &MARRIED_FILING_JOINTLY,
        FilingStatus::MarriedFilingSeparately => &MARRIED_FILING_SEPARATELY,
        FilingStatus::HeadOfHousehold => &HEAD_OF_HOUSEHOLD,
    }
}

/// Resolves the dividend tax-rate pair for a recognized filing status.
///
/// Scans the status's schedule in ascending order and returns the rates of
/// the first tier whose upper bound is at or above `income`; the bound
/// itself belongs to the lower tier. Income above every listed bound gets
/// the top-tier rates.
pub fn rates_for(status: FilingStatus, income: Decimal) -> TaxRatePair {
    let tiers = schedule(status);
    tiers
        .iter()
        .find(|tier| tier.max_income.is_none_or(|upper| income <= upper))
        .unwrap_or_else(|| tiers.last().expect("schedules are non-empty"))
        .rates()
}

/// Resolves the dividend tax-rate pair for a household.
///
/// Total over its whole domain: a filing-status label that fails to parse
/// yields [`TaxRatePair::DEFAULT`] rather than an error.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use etf_core::calculations::brackets::resolve_tax_rates;
/// use etf_core::models::TaxRatePair;
///
/// let rates = resolve_tax_rates(dec!(48350), "Single");
/// assert_eq!(rates.ordinary, dec!(0.10));
///
/// assert_eq!(
///     resolve_tax_rates(dec!(100000), "Unknown Status"),
///     TaxRatePair::DEFAULT,
/// );
/// ```
pub fn resolve_tax_rates(income: Decimal, filing_status: &str) -> TaxRatePair {
    match FilingStatus::parse(filing_status) {
        Some(status) => rates_for(status, income),
        None => {
            tracing::debug!(filing_status, "unrecognized filing status, using default rates");
            TaxRatePair::DEFAULT
        }
    }
}
