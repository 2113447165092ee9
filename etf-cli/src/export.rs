//! CSV export of the analysis result sequence.

use std::io::Write;

use etf_core::models::ReturnResult;

/// Column headers, in the order rows are written.
pub const HEADERS: [&str; 18] = [
    "ETF",
    "Expense Ratio",
    "Qualified Mix",
    "12M Yield",
    "Qualified Income",
    "Non-Qualified Income",
    "Tax on Qualified",
    "Tax on Non-Qualified",
    "Total Tax",
    "After-Tax Income",
    "After-Tax Yield",
    "Bear Market Gain/Loss ($)",
    "Total Return (Bear) $",
    "Total Return (Bear) %",
    "Total Return (Bull) $",
    "Total Return (Bull) %",
    "Total Return (Sideways) $",
    "Total Return (Sideways) %",
];

/// Writes the full result sequence, one row per ticker, preserving run
/// order.
pub fn write_csv<W: Write>(writer: W, results: &[ReturnResult]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADERS)?;
    for result in results {
        csv_writer.write_record([
            result.ticker.clone(),
            result.expense_ratio.to_string(),
            result.qualified_mix.to_string(),
            result.trailing_yield.to_string(),
            result.qualified_income.to_string(),
            result.non_qualified_income.to_string(),
            result.tax_on_qualified.to_string(),
            result.tax_on_non_qualified.to_string(),
            result.total_tax.to_string(),
            result.after_tax_income.to_string(),
            result.after_tax_yield.to_string(),
            result.bear_capital_dollars.to_string(),
            result.bear.net_dollars.to_string(),
            result.bear.net_fraction.to_string(),
            result.bull.net_dollars.to_string(),
            result.bull.net_fraction.to_string(),
            result.sideways.net_dollars.to_string(),
            result.sideways.net_fraction.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
