//! Parsing and normalization of user-facing inputs.
//!
//! Everything here runs at the presentation boundary, before a request
//! reaches the core: money and rate strings become [`Decimal`]s, percent
//! inputs become fractions, and free-text ticker lists are normalized to
//! validated uppercase symbols.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid number '{input}': {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("expected TICKER=VALUE, got '{0}'")]
    MalformedAssignment(String),

    #[error("invalid ticker symbol '{0}'")]
    InvalidTicker(String),
}

fn ticker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Z][A-Z0-9.\-]{0,9}$").expect("ticker pattern is valid")
    })
}

/// Parses a money or rate string into a [`Decimal`].
///
/// Tolerates surrounding whitespace and comma thousands separators
/// (`"150,000"`).
pub fn parse_decimal(s: &str) -> Result<Decimal, InputError> {
    let normalized = s.trim().replace(',', "");
    normalized.parse().map_err(|source| InputError::InvalidNumber {
        input: s.to_string(),
        source,
    })
}

/// Parses a percent input (`"-10.0"` meaning −10%) into a fraction.
pub fn parse_percent(s: &str) -> Result<Decimal, InputError> {
    Ok(parse_decimal(s)? / Decimal::ONE_HUNDRED)
}

/// Normalizes a comma-separated ticker list.
///
/// Entries are trimmed and uppercased; empty entries are dropped.
/// Returns the valid symbols in input order along with any entries the
/// symbol pattern rejects, so the caller can warn about them.
pub fn parse_ticker_list(s: &str) -> (Vec<String>, Vec<String>) {
    let mut valid = Vec::new();
    let mut rejected = Vec::new();

    for entry in s.split(',') {
        let symbol = entry.trim().to_ascii_uppercase();
        if symbol.is_empty() {
            continue;
        }
        if ticker_pattern().is_match(&symbol) {
            valid.push(symbol);
        } else {
            rejected.push(symbol);
        }
    }

    (valid, rejected)
}

/// Parses a `TICKER=VALUE` override argument into a normalized symbol and
/// its decimal value.
pub fn parse_ticker_assignment(s: &str) -> Result<(String, Decimal), InputError> {
    let (ticker, value) = s
        .split_once('=')
        .ok_or_else(|| InputError::MalformedAssignment(s.to_string()))?;

    let symbol = ticker.trim().to_ascii_uppercase();
    if !ticker_pattern().is_match(&symbol) {
        return Err(InputError::InvalidTicker(symbol));
    }

    Ok((symbol, parse_decimal(value)?))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("150,000").unwrap(), dec!(150000));
        assert_eq!(parse_decimal(" 1,234.56 ").unwrap(), dec!(1234.56));
    }

    #[test]
    fn parse_decimal_rejects_garbage() {
        assert!(parse_decimal("abc").is_err());
        assert!(parse_decimal("").is_err());
    }

    #[test]
    fn parse_percent_converts_to_fraction() {
        assert_eq!(parse_percent("-10.0").unwrap(), dec!(-0.10));
        assert_eq!(parse_percent("15").unwrap(), dec!(0.15));
        assert_eq!(parse_percent("0").unwrap(), dec!(0));
    }

    #[test]
    fn ticker_list_is_normalized_and_ordered() {
        let (valid, rejected) = parse_ticker_list("jepi, VYM ,schd");

        assert_eq!(valid, vec!["JEPI", "VYM", "SCHD"]);
        assert!(rejected.is_empty());
    }

    #[test]
    fn ticker_list_drops_empty_entries() {
        let (valid, rejected) = parse_ticker_list("VYM,, ,SCHD,");

        assert_eq!(valid, vec!["VYM", "SCHD"]);
        assert!(rejected.is_empty());
    }

    #[test]
    fn ticker_list_reports_malformed_symbols() {
        let (valid, rejected) = parse_ticker_list("VYM,NOT A TICKER,$PY");

        assert_eq!(valid, vec!["VYM"]);
        assert_eq!(rejected, vec!["NOT A TICKER", "$PY"]);
    }

    #[test]
    fn ticker_list_accepts_class_share_symbols() {
        let (valid, rejected) = parse_ticker_list("BRK.B,BF-B");

        assert_eq!(valid, vec!["BRK.B", "BF-B"]);
        assert!(rejected.is_empty());
    }

    #[test]
    fn assignment_splits_ticker_and_value() {
        let (ticker, value) = parse_ticker_assignment("vym=0.0006").unwrap();

        assert_eq!(ticker, "VYM");
        assert_eq!(value, dec!(0.0006));
    }

    #[test]
    fn assignment_without_equals_is_malformed() {
        assert!(matches!(
            parse_ticker_assignment("VYM0.0006"),
            Err(InputError::MalformedAssignment(_)),
        ));
    }

    #[test]
    fn assignment_with_bad_symbol_is_rejected() {
        assert!(matches!(
            parse_ticker_assignment("123=0.5"),
            Err(InputError::InvalidTicker(_)),
        ));
    }
}
