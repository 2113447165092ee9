//! Market-state labeling.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::MarketState;

/// Classifies the assumed market condition from the scenario-return
/// inputs.
///
/// A stateless display label, never stored: bull when the assumed bull
/// gain clears 5% and the assumed bear loss stays above −5%, bear when the
/// assumed bear loss is deeper than −10%, sideways otherwise. The sideways
/// return does not influence the label.
pub fn classify(bear_return: Decimal, bull_return: Decimal) -> MarketState {
    if bull_return > dec!(0.05) && bear_return > dec!(-0.05) {
        MarketState::Bull
    } else if bear_return < dec!(-0.10) {
        MarketState::Bear
    } else {
        MarketState::Sideways
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn strong_bull_with_shallow_bear_is_bull() {
        assert_eq!(classify(dec!(-0.02), dec!(0.12)), MarketState::Bull);
    }

    #[test]
    fn deep_bear_loss_is_bear() {
        assert_eq!(classify(dec!(-0.15), dec!(0.02)), MarketState::Bear);
    }

    #[test]
    fn default_assumptions_classify_as_sideways() {
        // Bear exactly -10% does not cross the bear threshold, and bull 15%
        // alone is not enough when the bear loss is below -5%.
        assert_eq!(classify(dec!(-0.10), dec!(0.15)), MarketState::Sideways);
    }

    #[test]
    fn flat_assumptions_are_sideways() {
        assert_eq!(classify(dec!(0), dec!(0)), MarketState::Sideways);
    }

    #[test]
    fn bull_threshold_is_exclusive() {
        assert_eq!(classify(dec!(-0.02), dec!(0.05)), MarketState::Sideways);
    }
}
