use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use etf_cli::chart::{self, ChartUnit};
use etf_cli::export;
use etf_cli::input;
use etf_cli::profile::AnalysisProfile;
use etf_cli::report;
use etf_core::analysis::{AnalysisRequest, TaxProfile, run_analysis};
use etf_core::calculations::market;
use etf_core::models::TaxRatePair;
use etf_core::source::{AssumptionSource, SourceConfig, SourceRegistry};
use etf_data::overrides::{OverrideSource, ScenarioOverrides, TickerOverrides};
use etf_data::register_default_factories;

const DEFAULT_TICKERS: &str = "JEPI,JEPQ,SPYI,VYM";

/// Estimate after-tax yield and hypothetical total return for a set of
/// ETFs under bear, bull, and sideways market scenarios.
///
/// Tax rates are resolved from household income and filing status through
/// a simplified bracket table, or supplied directly with --qualified-rate
/// and --ordinary-rate. Assumptions come from the built-in catalog or a
/// live quote lookup, optionally patched with per-ticker overrides.
#[derive(Parser, Debug)]
#[command(name = "etf-analyzer")]
#[command(version, about, long_about = None)]
struct Args {
    /// Amount invested, in dollars
    #[arg(long)]
    investment: Option<String>,

    /// Filing status: Single, "Married Filing Jointly",
    /// "Married Filing Separately", or "Head of Household"
    #[arg(long)]
    filing_status: Option<String>,

    /// Annual household income, in dollars
    #[arg(long)]
    income: Option<String>,

    /// Comma-separated ETF tickers
    #[arg(long)]
    tickers: Option<String>,

    /// Qualified dividend tax rate as a fraction (with --ordinary-rate,
    /// bypasses bracket resolution)
    #[arg(long)]
    qualified_rate: Option<String>,

    /// Ordinary dividend tax rate as a fraction
    #[arg(long)]
    ordinary_rate: Option<String>,

    /// Assumption backend: static or live
    #[arg(long, default_value = "static")]
    source: String,

    /// Override the market-data API base URL
    #[arg(long)]
    api_base: Option<String>,

    /// Bear market capital loss in percent (e.g. -10.0), applied to all
    /// tickers
    #[arg(long, allow_hyphen_values = true)]
    bear: Option<String>,

    /// Bull market capital gain in percent (e.g. 15.0), applied to all
    /// tickers
    #[arg(long, allow_hyphen_values = true)]
    bull: Option<String>,

    /// Sideways market gain/loss in percent, applied to all tickers
    #[arg(long, allow_hyphen_values = true)]
    sideways: Option<String>,

    /// Per-ticker expense ratio override as TICKER=FRACTION (repeatable)
    #[arg(long = "expense-ratio", value_name = "TICKER=VALUE")]
    expense_ratio: Vec<String>,

    /// Per-ticker qualified dividend mix override as TICKER=FRACTION
    /// (repeatable)
    #[arg(long = "qualified-mix", value_name = "TICKER=VALUE")]
    qualified_mix: Vec<String>,

    /// TOML analysis profile; command-line flags take precedence
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Write the full result table to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a page-formatted text report
    #[arg(long)]
    report: Option<PathBuf>,

    /// Render a scenario comparison chart in the chosen unit
    #[arg(long, value_enum)]
    chart: Option<ChartUnit>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let profile = match &args.profile {
        Some(path) => AnalysisProfile::load(path)?,
        None => AnalysisProfile::default(),
    };

    let investment = match &args.investment {
        Some(raw) => input::parse_decimal(raw).context("invalid --investment")?,
        None => profile.investment.unwrap_or_else(|| Decimal::from(150_000)),
    };
    let income = match &args.income {
        Some(raw) => input::parse_decimal(raw).context("invalid --income")?,
        None => profile.income.unwrap_or_else(|| Decimal::from(276_000)),
    };
    let filing_status = args
        .filing_status
        .clone()
        .or_else(|| profile.filing_status.clone())
        .unwrap_or_else(|| "Single".to_string());

    let (tickers, rejected) = match &args.tickers {
        Some(raw) => input::parse_ticker_list(raw),
        None => match &profile.tickers {
            Some(list) => input::parse_ticker_list(&list.join(",")),
            None => input::parse_ticker_list(DEFAULT_TICKERS),
        },
    };
    for symbol in &rejected {
        tracing::warn!(symbol = symbol.as_str(), "ignoring malformed ticker symbol");
    }

    let qualified_rate = match &args.qualified_rate {
        Some(raw) => Some(input::parse_decimal(raw).context("invalid --qualified-rate")?),
        None => profile.qualified_rate,
    };
    let ordinary_rate = match &args.ordinary_rate {
        Some(raw) => Some(input::parse_decimal(raw).context("invalid --ordinary-rate")?),
        None => profile.ordinary_rate,
    };
    let tax_profile = match (qualified_rate, ordinary_rate) {
        (Some(qualified), Some(ordinary)) => {
            TaxProfile::Explicit(TaxRatePair { qualified, ordinary })
        }
        (None, None) => TaxProfile::Household {
            income,
            filing_status: filing_status.clone(),
        },
        _ => {
            tracing::warn!(
                "rate override needs both --qualified-rate and --ordinary-rate; \
                 resolving from income and filing status instead"
            );
            TaxProfile::Household {
                income,
                filing_status: filing_status.clone(),
            }
        }
    };

    let scenarios = ScenarioOverrides {
        bear: match &args.bear {
            Some(raw) => Some(input::parse_percent(raw).context("invalid --bear")?),
            None => profile.scenarios.as_ref().and_then(|s| s.bear),
        },
        bull: match &args.bull {
            Some(raw) => Some(input::parse_percent(raw).context("invalid --bull")?),
            None => profile.scenarios.as_ref().and_then(|s| s.bull),
        },
        sideways: match &args.sideways {
            Some(raw) => Some(input::parse_percent(raw).context("invalid --sideways")?),
            None => profile.scenarios.as_ref().and_then(|s| s.sideways),
        },
    };

    let mut ticker_overrides: HashMap<String, TickerOverrides> = profile
        .overrides
        .iter()
        .map(|(ticker, o)| {
            (
                ticker.to_ascii_uppercase(),
                TickerOverrides {
                    expense_ratio: o.expense_ratio,
                    qualified_mix: o.qualified_mix,
                },
            )
        })
        .collect();
    for raw in &args.expense_ratio {
        let (ticker, value) = input::parse_ticker_assignment(raw).context("invalid --expense-ratio")?;
        ticker_overrides.entry(ticker).or_default().expense_ratio = Some(value);
    }
    for raw in &args.qualified_mix {
        let (ticker, value) = input::parse_ticker_assignment(raw).context("invalid --qualified-mix")?;
        ticker_overrides.entry(ticker).or_default().qualified_mix = Some(value);
    }

    let mut registry = SourceRegistry::new();
    register_default_factories(&mut registry);
    let base = registry.create(&SourceConfig {
        backend: args.source.clone(),
        api_base: args.api_base.clone(),
    })?;

    let source: Box<dyn AssumptionSource> = if ticker_overrides.is_empty() && scenarios.is_empty() {
        base
    } else {
        let mut layered = OverrideSource::over(base).with_scenarios(scenarios.clone());
        for (ticker, overrides) in ticker_overrides {
            layered = layered.with_ticker(ticker, overrides);
        }
        Box::new(layered)
    };

    let request = AnalysisRequest {
        investment,
        tax_profile,
        tickers,
    };
    let outcome = run_analysis(&request, source.as_ref()).await?;

    println!("ETF Tax-Adjusted Return Analyzer");
    println!(
        "Qualified rate: {}   Ordinary rate: {}",
        report::fmt_percent(outcome.tax_rates.qualified),
        report::fmt_percent(outcome.tax_rates.ordinary),
    );
    if let (Some(bear), Some(bull)) = (scenarios.bear, scenarios.bull) {
        println!("Assumed market state: {}", market::classify(bear, bull));
    }
    println!();

    for skipped in &outcome.skipped {
        println!("Warning: could not process {}: {}", skipped.ticker, skipped.reason);
    }

    if outcome.results.is_empty() {
        println!("No results to display.");
    } else {
        print!("{}", report::render_table(&outcome));
        println!();
        if let Some(best) = outcome.best_bull() {
            println!(
                "Best bull market performer: {} ({})",
                best.ticker,
                report::fmt_percent(best.bull.net_fraction),
            );
        }
        if let Some(worst) = outcome.worst_bear() {
            println!(
                "Worst bear market performer: {} ({})",
                worst.ticker,
                report::fmt_percent(worst.bear.net_fraction),
            );
        }
        if let Some(unit) = args.chart {
            println!();
            let rows = chart::series(&outcome.results, unit);
            print!("{}", chart::render(&rows, unit));
        }
    }

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("cannot create '{}'", path.display()))?;
        export::write_csv(file, &outcome.results)
            .with_context(|| format!("cannot write CSV to '{}'", path.display()))?;
        println!("Wrote CSV results to {}", path.display());
    }
    if let Some(path) = &args.report {
        std::fs::write(path, report::render_report(&outcome, Local::now()))
            .with_context(|| format!("cannot write report to '{}'", path.display()))?;
        println!("Wrote report to {}", path.display());
    }

    Ok(())
}
