use serde::{Deserialize, Serialize};

/// Display label describing the assumed market condition.
///
/// Derived from the scenario-return inputs by
/// [`calculations::market::classify`]; never stored as state.
///
/// [`calculations::market::classify`]: crate::calculations::market::classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketState {
    Bull,
    Bear,
    Sideways,
}

impl MarketState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bull => "Bull Market",
            Self::Bear => "Bear Market",
            Self::Sideways => "Sideways Market",
        }
    }
}

impl std::fmt::Display for MarketState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
