//! Scenario comparison chart.
//!
//! Builds grouped bar series (one group per ticker, one bar per scenario)
//! from the result sequence, in either percent or dollar units, and
//! renders them as horizontal terminal bars. Group order follows result
//! order, which in turn follows input order.

use std::fmt::Write;

use clap::ValueEnum;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use etf_core::models::ReturnResult;

use crate::report::{fmt_dollars, fmt_percent};

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartUnit {
    /// Net return as a percentage.
    Percent,
    /// Net return in dollars.
    Dollars,
}

/// One ticker's bar group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRow {
    pub ticker: String,
    pub bear: Decimal,
    pub bull: Decimal,
    pub sideways: Decimal,
}

/// Extracts the chart series from the result sequence.
pub fn series(results: &[ReturnResult], unit: ChartUnit) -> Vec<ChartRow> {
    results
        .iter()
        .map(|result| {
            let pick = |outcome: &etf_core::models::ScenarioOutcome| match unit {
                ChartUnit::Percent => outcome.net_fraction,
                ChartUnit::Dollars => outcome.net_dollars,
            };
            ChartRow {
                ticker: result.ticker.clone(),
                bear: pick(&result.bear),
                bull: pick(&result.bull),
                sideways: pick(&result.sideways),
            }
        })
        .collect()
}

/// Renders the series as labeled horizontal bars, scaled to the largest
/// absolute value in the series.
pub fn render(rows: &[ChartRow], unit: ChartUnit) -> String {
    let max_abs = rows
        .iter()
        .flat_map(|row| [row.bear.abs(), row.bull.abs(), row.sideways.abs()])
        .max()
        .unwrap_or(Decimal::ZERO);

    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "{}", row.ticker);
        for (label, value) in [
            ("bear", row.bear),
            ("bull", row.bull),
            ("sideways", row.sideways),
        ] {
            let _ = writeln!(out, "  {:<9} {} {}", label, bar(value, max_abs), fmt_value(value, unit));
        }
    }
    out
}

fn fmt_value(value: Decimal, unit: ChartUnit) -> String {
    match unit {
        ChartUnit::Percent => fmt_percent(value),
        ChartUnit::Dollars => fmt_dollars(value),
    }
}

fn bar(value: Decimal, max_abs: Decimal) -> String {
    if max_abs == Decimal::ZERO {
        return String::new();
    }
    let scale = (value.abs() / max_abs).to_f64().unwrap_or(0.0);
    let length = (scale * BAR_WIDTH as f64).round() as usize;
    let glyph = if value < Decimal::ZERO { '░' } else { '█' };
    std::iter::repeat_n(glyph, length).collect()
}
