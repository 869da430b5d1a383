//! Prints the latest daily crude benchmark prices from the EIA spot dataset.
//!
//! One GET against `petroleum/pri/spt/data` for the `RWTC` and `RBRTE`
//! series. Output is a JSON object `{"WTI": .., "Brent": .., "DubaiOman": ..}`
//! in $/bbl, Dubai/Oman being proxied from Brent.

use std::io::{self, Write};

use anyhow::{Context, Result};
use static_init::dynamic;
use tracing::info;

use lib_common::configs::config_eia::{ConfigError, EiaConfig};
use lib_common::loggers::loggerlocal::{setup_logging, LoggerLocalOptions};
use lib_common::markets::eia::{Benchmark, EiaClient};

const APP_NAME: &str = "spot_prices";

#[dynamic]
static EIA_CONFIG: Result<EiaConfig, ConfigError> = EiaConfig::from_env();

fn main() -> Result<()> {
    let config = (*EIA_CONFIG)
        .as_ref()
        .map_err(Clone::clone)
        .context("Failed to resolve EIA configuration")?;

    let _guard = setup_logging(APP_NAME, LoggerLocalOptions::from_env())
        .context("Failed to initialize logging")?;

    let prices = EiaClient::new(config)
        .fetch_spot_prices()
        .context("Failed to fetch EIA spot prices")?;
    for benchmark in [Benchmark::Wti, Benchmark::Brent, Benchmark::DubaiOman] {
        info!(benchmark = benchmark.label(), price = prices.price(benchmark), "spot price");
    }

    let rendered = serde_json::to_string_pretty(&prices)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", rendered)?;
    out.flush()?;

    Ok(())
}
