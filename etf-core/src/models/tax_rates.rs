use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The pair of dividend tax rates that applies to a household.
///
/// Both values are fractions in `[0, 1]`. `qualified` applies to qualified
/// dividend income, `ordinary` to non-qualified dividend income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRatePair {
    pub qualified: Decimal,
    pub ordinary: Decimal,
}

impl TaxRatePair {
    /// Rate pair used when the filing status cannot be recognized.
    ///
    /// An unrecognized status is not an error; the resolver answers with
    /// this pair instead of failing.
    pub const DEFAULT: TaxRatePair = TaxRatePair {
        qualified: dec!(0.15),
        ordinary: dec!(0.24),
    };
}

/// One tier of a filing status's bracket schedule.
///
/// `max_income` is the inclusive upper bound of the tier; `None` marks the
/// unbounded top bracket. Tiers within a schedule are ordered by strictly
/// increasing `max_income`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub max_income: Option<Decimal>,
    pub qualified_rate: Decimal,
    pub ordinary_rate: Decimal,
}

impl TaxBracket {
    pub fn rates(&self) -> TaxRatePair {
        TaxRatePair {
            qualified: self.qualified_rate,
            ordinary: self.ordinary_rate,
        }
    }
}
