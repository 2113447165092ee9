use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when an assumption record fails boundary validation.
///
/// The return calculator assumes pre-validated input; this error is only
/// produced at the analysis boundary, where a bad record downgrades to a
/// per-ticker skip rather than a fatal failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssumptionRangeError {
    #[error("{field} must be within [0, 1], got {value}")]
    RatioOutOfRange { field: &'static str, value: Decimal },

    #[error("trailing yield must be non-negative, got {0}")]
    NegativeYield(Decimal),
}

/// Per-ticker financial assumptions feeding the return calculator.
///
/// Constructed once per analysis run by an [`AssumptionSource`] and never
/// mutated afterwards. Ratios are fractions in `[0, 1]`; scenario returns
/// are signed fractions (a hypothetical capital price change, excluding
/// income and fees).
///
/// [`AssumptionSource`]: crate::source::AssumptionSource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtfAssumptions {
    pub expense_ratio: Decimal,
    pub qualified_mix: Decimal,
    pub trailing_yield: Decimal,
    pub bear_return: Decimal,
    pub bull_return: Decimal,
    pub sideways_return: Decimal,
}

impl EtfAssumptions {
    /// Fallback values used when a source cannot supply a field.
    pub const DEFAULT_TRAILING_YIELD: Decimal = dec!(0.02);
    pub const DEFAULT_EXPENSE_RATIO: Decimal = dec!(0.01);
    pub const DEFAULT_QUALIFIED_MIX: Decimal = dec!(0.5);

    /// Range-checks the record. Ratios must be in `[0, 1]` and the trailing
    /// yield non-negative; scenario returns may take any sign.
    pub fn validate(&self) -> Result<(), AssumptionRangeError> {
        for (field, value) in [
            ("expense ratio", self.expense_ratio),
            ("qualified mix", self.qualified_mix),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(AssumptionRangeError::RatioOutOfRange { field, value });
            }
        }
        if self.trailing_yield < Decimal::ZERO {
            return Err(AssumptionRangeError::NegativeYield(self.trailing_yield));
        }
        Ok(())
    }
}

impl Default for EtfAssumptions {
    fn default() -> Self {
        Self {
            expense_ratio: Self::DEFAULT_EXPENSE_RATIO,
            qualified_mix: Self::DEFAULT_QUALIFIED_MIX,
            trailing_yield: Self::DEFAULT_TRAILING_YIELD,
            bear_return: Decimal::ZERO,
            bull_return: Decimal::ZERO,
            sideways_return: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_record_uses_documented_fallbacks() {
        let record = EtfAssumptions::default();

        assert_eq!(record.trailing_yield, dec!(0.02));
        assert_eq!(record.expense_ratio, dec!(0.01));
        assert_eq!(record.qualified_mix, dec!(0.5));
        assert_eq!(record.bear_return, Decimal::ZERO);
    }

    #[test]
    fn validate_accepts_default_record() {
        assert_eq!(EtfAssumptions::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_ratio_above_one() {
        let record = EtfAssumptions {
            qualified_mix: dec!(1.2),
            ..EtfAssumptions::default()
        };

        assert_eq!(
            record.validate(),
            Err(AssumptionRangeError::RatioOutOfRange {
                field: "qualified mix",
                value: dec!(1.2),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_yield() {
        let record = EtfAssumptions {
            trailing_yield: dec!(-0.01),
            ..EtfAssumptions::default()
        };

        assert_eq!(
            record.validate(),
            Err(AssumptionRangeError::NegativeYield(dec!(-0.01)))
        );
    }

    #[test]
    fn validate_allows_negative_scenario_returns() {
        let record = EtfAssumptions {
            bear_return: dec!(-0.25),
            ..EtfAssumptions::default()
        };

        assert_eq!(record.validate(), Ok(()));
    }
}
