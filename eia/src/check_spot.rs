//! Prints the series facets of the EIA petroleum spot price dataset.
//!
//! Reads the API key from `VITE_EIA_KEY` (a `.env` file in the working
//! directory is honoured), issues one GET against
//! `petroleum/pri/spt/facet/series` and writes `response.facets` to stdout
//! as two-space indented JSON. Any failure exits non-zero with the error
//! chain on stderr and nothing on stdout.

use std::io;

use anyhow::{Context, Result};
use static_init::dynamic;
use tracing::info;

use lib_common::configs::config_eia::{ConfigError, EiaConfig};
use lib_common::loggers::loggerlocal::{setup_logging, LoggerLocalOptions};
use lib_common::markets::eia::{print_facets, EiaClient, SERIES_FACET, SPOT_PRICE_ROUTE};

const APP_NAME: &str = "check_spot";

// Resolved at startup so `.env` is loaded before logging reads LOG_DIR.
#[dynamic]
static EIA_CONFIG: Result<EiaConfig, ConfigError> = EiaConfig::from_env();

fn main() -> Result<()> {
    let config = (*EIA_CONFIG)
        .as_ref()
        .map_err(Clone::clone)
        .context("Failed to resolve EIA configuration")?;

    let _guard = setup_logging(APP_NAME, LoggerLocalOptions::from_env())
        .context("Failed to initialize logging")?;
    info!(?config, "configuration resolved");

    let client = EiaClient::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    print_facets(&client, SPOT_PRICE_ROUTE, SERIES_FACET, &mut out)
        .context("Failed to print EIA spot price facets")?;

    Ok(())
}
