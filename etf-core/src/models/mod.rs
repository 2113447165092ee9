mod assumptions;
mod filing_status;
mod market_state;
mod return_result;
mod tax_rates;

pub use assumptions::{AssumptionRangeError, EtfAssumptions};
pub use filing_status::FilingStatus;
pub use market_state::MarketState;
pub use return_result::{ReturnResult, ScenarioOutcome};
pub use tax_rates::{TaxBracket, TaxRatePair};
