//! End-to-end flow: parse inputs, run an analysis against the built-in
//! catalog, and render every output artifact.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use etf_cli::chart::{self, ChartUnit};
use etf_cli::{export, input, report};
use etf_core::analysis::{AnalysisRequest, TaxProfile, run_analysis};
use etf_data::StaticCatalogSource;

fn request(tickers: &str) -> AnalysisRequest {
    let (tickers, rejected) = input::parse_ticker_list(tickers);
    assert!(rejected.is_empty(), "test inputs use well-formed symbols");

    AnalysisRequest {
        investment: dec!(150000),
        tax_profile: TaxProfile::Household {
            income: dec!(276000),
            filing_status: "Single".to_string(),
        },
        tickers,
    }
}

#[tokio::test]
async fn default_ticker_set_produces_a_full_result_sequence() {
    let outcome = run_analysis(&request("JEPI,JEPQ,SPYI,VYM"), &StaticCatalogSource)
        .await
        .expect("valid request");

    assert_eq!(outcome.results.len(), 4);
    assert!(outcome.skipped.is_empty());

    let order: Vec<&str> = outcome.results.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(order, vec!["JEPI", "JEPQ", "SPYI", "VYM"]);

    // 276000 Single resolves into the 15%/35% tier.
    assert_eq!(outcome.tax_rates.qualified, dec!(0.15));
    assert_eq!(outcome.tax_rates.ordinary, dec!(0.35));
}

#[tokio::test]
async fn unknown_ticker_degrades_to_a_warning_in_every_artifact() {
    let outcome = run_analysis(&request("VYM,UNKNOWN123"), &StaticCatalogSource)
        .await
        .expect("valid request");

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.skipped.len(), 1);

    // CSV: header plus the single surviving row.
    let mut buffer = Vec::new();
    export::write_csv(&mut buffer, &outcome.results).expect("in-memory write");
    let csv_text = String::from_utf8(buffer).expect("csv is utf-8");
    assert_eq!(csv_text.lines().count(), 2);
    assert!(csv_text.lines().nth(1).expect("data row").starts_with("VYM,"));

    // Text report mentions both the result and the skip.
    let report_text = report::render_report(&outcome, chrono::Local::now());
    assert!(report_text.contains("VYM: Bull="));
    assert!(report_text.contains("UNKNOWN123: skipped"));
}

#[tokio::test]
async fn chart_series_follow_result_order_in_both_units() {
    let outcome = run_analysis(&request("SCHD,VYM"), &StaticCatalogSource)
        .await
        .expect("valid request");

    let percent = chart::series(&outcome.results, ChartUnit::Percent);
    let dollars = chart::series(&outcome.results, ChartUnit::Dollars);

    assert_eq!(percent.len(), 2);
    assert_eq!(percent[0].ticker, "SCHD");
    assert_eq!(percent[1].ticker, "VYM");
    // Same row, same scenario, different unit: for VYM at 150000 with the
    // 15%/35% rates, net bull is 0.1760 + 0.02352 - 0.0006 = 0.19892.
    assert_eq!(percent[1].bull, dec!(0.1989));
    assert_eq!(dollars[1].bull, dec!(29838.00));
}

#[tokio::test]
async fn all_tickers_missing_yields_an_empty_but_graceful_outcome() {
    let outcome = run_analysis(&request("NOPE1,NOPE2"), &StaticCatalogSource)
        .await
        .expect("valid request");

    assert!(outcome.results.is_empty());
    assert_eq!(outcome.skipped.len(), 2);
    assert_eq!(outcome.best_bull(), None);

    let mut buffer = Vec::new();
    export::write_csv(&mut buffer, &outcome.results).expect("in-memory write");
    assert_eq!(String::from_utf8(buffer).expect("utf-8").lines().count(), 1);
}
