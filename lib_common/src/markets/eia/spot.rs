//! # EIA Spot Prices
//!
//! Latest daily crude spot prices for the two benchmarks the petroleum spot
//! dataset carries (WTI Cushing `RWTC`, Brent `RBRTE`), plus a Dubai/Oman
//! figure proxied from Brent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use super::apicalleia::{EiaClient, EiaError};
use super::SPOT_PRICE_ROUTE;

/// Series id of the WTI Cushing daily spot price.
pub const WTI_SERIES: &str = "RWTC";
/// Series id of the Europe Brent daily spot price.
pub const BRENT_SERIES: &str = "RBRTE";
/// Premium added to Brent for the Dubai/Oman proxy, in $/bbl.
pub const DUBAI_OMAN_PREMIUM: f64 = 0.42;

/// Query of the spot price request: newest ten daily values of both series.
const SPOT_QUERY: &[(&str, &str)] = &[
    ("frequency", "daily"),
    ("data[0]", "value"),
    ("facets[series][]", BRENT_SERIES),
    ("facets[series][]", WTI_SERIES),
    ("sort[0][column]", "period"),
    ("sort[0][direction]", "desc"),
    ("offset", "0"),
    ("length", "10"),
];

/// One row of `response.data` from the spot price dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpotQuote {
    /// Series id, e.g. `RWTC`.
    pub series: String,
    /// Observation date, `YYYY-MM-DD`.
    pub period: String,
    /// Price in $/bbl; EIA sends it either as a number or as a string.
    #[serde(default, deserialize_with = "deserialize_price")]
    pub value: Option<f64>,
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid price {:?}: {}", s, e))),
        Value::Null => Ok(None),
        other => Err(serde::de::Error::custom(format!("invalid price {}", other))),
    }
}

/// Crude benchmarks the prices are quoted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Benchmark {
    Wti,
    Brent,
    DubaiOman,
}

impl Benchmark {
    /// Display name of the benchmark.
    pub fn label(self) -> &'static str {
        match self {
            Benchmark::Wti => "WTI",
            Benchmark::Brent => "Brent",
            Benchmark::DubaiOman => "Dubai/Oman",
        }
    }
}

/// Latest benchmark prices in $/bbl.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpotPrices {
    #[serde(rename = "WTI")]
    pub wti: f64,
    #[serde(rename = "Brent")]
    pub brent: f64,
    #[serde(rename = "DubaiOman")]
    pub dubai_oman: f64,
}

impl SpotPrices {
    /// Builds the set from WTI and Brent; Dubai/Oman is Brent plus the premium,
    /// rounded to cents.
    pub fn from_wti_brent(wti: f64, brent: f64) -> Self {
        Self {
            wti,
            brent,
            dubai_oman: ((brent + DUBAI_OMAN_PREMIUM) * 100.0).round() / 100.0,
        }
    }

    /// Price of `benchmark`.
    pub fn price(&self, benchmark: Benchmark) -> f64 {
        match benchmark {
            Benchmark::Wti => self.wti,
            Benchmark::Brent => self.brent,
            Benchmark::DubaiOman => self.dubai_oman,
        }
    }
}

/// Parses `response.data` of the spot price dataset.
pub fn parse_quotes(data: &Value) -> Result<Vec<SpotQuote>, EiaError> {
    Vec::<SpotQuote>::deserialize(data).map_err(|e| EiaError::UnexpectedShape(e.to_string()))
}

/// Most recent quote with a value for `series`. On equal periods the
/// earlier row wins.
pub fn latest_quote<'a>(quotes: &'a [SpotQuote], series: &str) -> Option<&'a SpotQuote> {
    quotes
        .iter()
        .filter(|q| q.series == series && q.value.is_some())
        .fold(None, |best: Option<&SpotQuote>, q| match best {
            Some(b) if b.period >= q.period => Some(b),
            _ => Some(q),
        })
}

/// Reduces quotes to the latest WTI and Brent prices.
pub fn spot_prices_from_quotes(quotes: &[SpotQuote]) -> Result<SpotPrices, EiaError> {
    let price_of = |series: &str| {
        latest_quote(quotes, series)
            .and_then(|q| q.value)
            .ok_or_else(|| EiaError::MissingSeries(series.to_string()))
    };
    Ok(SpotPrices::from_wti_brent(price_of(WTI_SERIES)?, price_of(BRENT_SERIES)?))
}

impl EiaClient {
    /// Fetches the latest WTI and Brent daily spot prices in one request.
    pub fn fetch_spot_prices(&self) -> Result<SpotPrices, EiaError> {
        let data = self.fetch_data(SPOT_PRICE_ROUTE, SPOT_QUERY)?;
        let quotes = parse_quotes(&data)?;
        let prices = spot_prices_from_quotes(&quotes)?;
        debug!(quotes = quotes.len(), ?prices, "spot prices resolved");
        Ok(prices)
    }
}
