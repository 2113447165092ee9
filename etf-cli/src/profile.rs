//! TOML analysis profiles.
//!
//! A profile captures a full set of analysis inputs so a recurring
//! what-if can be re-run without retyping flags. Command-line flags take
//! precedence over profile values; anything absent from both falls back
//! to the built-in defaults.
//!
//! ## Format
//!
//! All rates and returns in a profile are fractions, not percentages.
//!
//! ```toml
//! investment = 150000
//! filing_status = "Single"
//! income = 276000
//! tickers = ["JEPI", "JEPQ", "SPYI", "VYM"]
//!
//! [scenarios]
//! bear = -0.10
//! bull = 0.15
//! sideways = 0.0
//!
//! [overrides.VYM]
//! expense_ratio = 0.0006
//! qualified_mix = 0.95
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisProfile {
    pub investment: Option<Decimal>,
    pub filing_status: Option<String>,
    pub income: Option<Decimal>,
    pub tickers: Option<Vec<String>>,
    /// Explicit rate pair; both must be present to bypass the bracket
    /// resolver.
    pub qualified_rate: Option<Decimal>,
    pub ordinary_rate: Option<Decimal>,
    pub scenarios: Option<ProfileScenarios>,
    #[serde(default)]
    pub overrides: HashMap<String, ProfileOverride>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileScenarios {
    pub bear: Option<Decimal>,
    pub bull: Option<Decimal>,
    pub sideways: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileOverride {
    pub expense_ratio: Option<Decimal>,
    pub qualified_mix: Option<Decimal>,
}

impl AnalysisProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read profile '{}'", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("cannot parse profile '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn full_profile_parses() {
        let profile: AnalysisProfile = toml::from_str(
            r#"
            investment = 150000
            filing_status = "Married Filing Jointly"
            income = 276000
            tickers = ["JEPI", "VYM"]

            [scenarios]
            bear = -0.25

            [overrides.VYM]
            qualified_mix = 0.95
            "#,
        )
        .expect("well-formed profile");

        assert_eq!(profile.investment, Some(dec!(150000)));
        assert_eq!(profile.filing_status.as_deref(), Some("Married Filing Jointly"));
        assert_eq!(
            profile.tickers,
            Some(vec!["JEPI".to_string(), "VYM".to_string()]),
        );
        let scenarios = profile.scenarios.expect("scenarios table present");
        assert_eq!(scenarios.bear, Some(dec!(-0.25)));
        assert_eq!(scenarios.bull, None);
        assert!(profile.overrides.contains_key("VYM"));
    }

    #[test]
    fn empty_profile_is_all_defaults() {
        let profile: AnalysisProfile = toml::from_str("").expect("empty profile parses");

        assert_eq!(profile.investment, None);
        assert!(profile.overrides.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<AnalysisProfile, _> = toml::from_str("investmnet = 1000");

        assert!(result.is_err());
    }
}
