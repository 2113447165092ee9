//! On-screen table and page-formatted text report rendering.

use std::fmt::Write;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use etf_core::analysis::AnalysisOutcome;

/// Formats a fraction as a percentage with two decimal places.
pub fn fmt_percent(fraction: Decimal) -> String {
    let percent = (fraction * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!("{percent}%")
}

/// Formats a currency value with a dollar sign, keeping the sign in front
/// of the symbol for negatives.
pub fn fmt_dollars(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-${}", -amount)
    } else {
        format!("${amount}")
    }
}

/// Renders the per-ticker result table shown after a run.
pub fn render_table(outcome: &AnalysisOutcome) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<8} {:>9} {:>12} {:>11} {:>11} {:>11} {:>14}",
        "ETF", "Yield", "After-Tax", "Bear %", "Bull %", "Sideways %", "Bull $",
    );
    for result in &outcome.results {
        let _ = writeln!(
            out,
            "{:<8} {:>9} {:>12} {:>11} {:>11} {:>11} {:>14}",
            result.ticker,
            fmt_percent(result.trailing_yield),
            fmt_percent(result.after_tax_yield),
            fmt_percent(result.bear.net_fraction),
            fmt_percent(result.bull.net_fraction),
            fmt_percent(result.sideways.net_fraction),
            fmt_dollars(result.bull.net_dollars),
        );
    }

    out
}

/// Renders the downloadable text report: a titled, timestamped page with
/// one summary line per ticker.
pub fn render_report(outcome: &AnalysisOutcome, generated_at: DateTime<Local>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "ETF Tax-Adjusted Return Report");
    let _ = writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(
        out,
        "Tax rates: qualified {}, ordinary {}",
        fmt_percent(outcome.tax_rates.qualified),
        fmt_percent(outcome.tax_rates.ordinary),
    );
    let _ = writeln!(out);

    for result in &outcome.results {
        let _ = writeln!(
            out,
            "{}: Bull={}, Bear={}, Sideways={}",
            result.ticker,
            fmt_percent(result.bull.net_fraction),
            fmt_percent(result.bear.net_fraction),
            fmt_percent(result.sideways.net_fraction),
        );
    }

    for skipped in &outcome.skipped {
        let _ = writeln!(out, "{}: skipped ({})", skipped.ticker, skipped.reason);
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use etf_core::analysis::SkippedTicker;
    use etf_core::calculations::ReturnCalculator;
    use etf_core::models::{EtfAssumptions, TaxRatePair};

    use super::*;

    fn outcome() -> AnalysisOutcome {
        let rates = TaxRatePair {
            qualified: dec!(0.15),
            ordinary: dec!(0.32),
        };
        let vym = EtfAssumptions {
            expense_ratio: dec!(0.0006),
            qualified_mix: dec!(0.95),
            trailing_yield: dec!(0.028),
            bear_return: dec!(-0.0045),
            bull_return: dec!(0.1760),
            sideways_return: dec!(0.0808),
        };
        AnalysisOutcome {
            tax_rates: rates,
            results: vec![ReturnCalculator::new(rates).compute("VYM", dec!(150000), &vym)],
            skipped: vec![SkippedTicker {
                ticker: "UNKNOWN123".to_string(),
                reason: "no assumption record for ticker 'UNKNOWN123'".to_string(),
            }],
        }
    }

    #[test]
    fn percent_formatting_scales_and_rounds() {
        assert_eq!(fmt_percent(dec!(0.1990)), "19.90%");
        assert_eq!(fmt_percent(dec!(-0.0045)), "-0.45%");
    }

    #[test]
    fn dollar_formatting_keeps_the_sign_outside() {
        assert_eq!(fmt_dollars(dec!(29844.30)), "$29844.30");
        assert_eq!(fmt_dollars(dec!(-675.00)), "-$675.00");
    }

    #[test]
    fn table_has_a_row_per_result() {
        let table = render_table(&outcome());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ETF"));
        assert!(lines[1].starts_with("VYM"));
        assert!(lines[1].contains("19.90%"));
    }

    #[test]
    fn report_lists_returns_and_skips() {
        let report = render_report(&outcome(), Local::now());

        assert!(report.starts_with("ETF Tax-Adjusted Return Report"));
        assert!(report.contains("VYM: Bull=19.90%, Bear=1.85%, Sideways=10.38%"));
        assert!(report.contains("UNKNOWN123: skipped"));
    }
}
