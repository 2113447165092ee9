//! Live trailing-yield lookup over a quote HTTP API.
//!
//! The quote endpoint only knows market data; trailing dividend yield is
//! the one field it can supply. Expense ratio, qualified mix, and scenario
//! returns are not quote data, so they always fall back to the documented
//! defaults; a missing yield falls back the same way. Requests carry a
//! client-level timeout so a slow endpoint degrades into a per-ticker
//! skip instead of stalling the run.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use etf_core::models::EtfAssumptions;
use etf_core::source::{AssumptionSource, SourceError};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResponse,
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    result: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Quote {
    symbol: String,
    trailing_annual_dividend_yield: Option<Decimal>,
}

/// Source that resolves trailing yields from a quote API.
#[derive(Debug)]
pub struct QuoteApiSource {
    client: Client,
    base_url: String,
}

impl QuoteApiSource {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the source at a different endpoint (tests, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl Default for QuoteApiSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssumptionSource for QuoteApiSource {
    fn source_name(&self) -> &'static str {
        "live"
    }

    async fn assumptions(&self, ticker: &str) -> Result<EtfAssumptions, SourceError> {
        let url = format!("{}/v7/finance/quote", self.base_url);

        let fetch_err = |reason: String| SourceError::Fetch {
            ticker: ticker.to_string(),
            reason,
        };

        let response = self
            .client
            .get(&url)
            .query(&[("symbols", ticker)])
            .send()
            .await
            .map_err(|e| fetch_err(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_err(format!("HTTP {}", response.status())));
        }

        let envelope: QuoteEnvelope = response
            .json()
            .await
            .map_err(|e| fetch_err(e.to_string()))?;

        assumptions_from_envelope(ticker, envelope)
    }
}

/// Maps a quote payload onto an assumption record, filling every field the
/// quote API cannot provide with the documented default.
fn assumptions_from_envelope(
    ticker: &str,
    envelope: QuoteEnvelope,
) -> Result<EtfAssumptions, SourceError> {
    let quote = envelope
        .quote_response
        .result
        .into_iter()
        .find(|quote| quote.symbol.eq_ignore_ascii_case(ticker))
        .ok_or_else(|| SourceError::UnknownTicker(ticker.to_string()))?;

    let trailing_yield = match quote.trailing_annual_dividend_yield {
        Some(value) => value,
        None => {
            tracing::debug!(ticker, "quote has no trailing yield, using default");
            EtfAssumptions::DEFAULT_TRAILING_YIELD
        }
    };

    Ok(EtfAssumptions {
        trailing_yield,
        ..EtfAssumptions::default()
    })
}
