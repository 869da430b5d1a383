//! Lists the activity facets of the EIA international dataset and looks up
//! the crude oil product facet.
//!
//! Output (stdout):
//! - `Activity IDs:` followed by a JSON array of `id:name` labels.
//! - `Crude Oil Product ID:` followed by the matching facet as JSON, or `null`.

use std::io::{self, Write};

use anyhow::{Context, Result};
use static_init::dynamic;
use tracing::{info, warn};

use lib_common::configs::config_eia::{ConfigError, EiaConfig};
use lib_common::loggers::loggerlocal::{setup_logging, LoggerLocalOptions};
use lib_common::markets::eia::facets::{facet_labels, find_facet_by_name, parse_facets};
use lib_common::markets::eia::{EiaClient, ACTIVITY_FACET, INTERNATIONAL_ROUTE, PRODUCT_FACET};

const APP_NAME: &str = "international_facets";
const CRUDE_OIL: &str = "crude oil";

#[dynamic]
static EIA_CONFIG: Result<EiaConfig, ConfigError> = EiaConfig::from_env();

fn main() -> Result<()> {
    let config = (*EIA_CONFIG)
        .as_ref()
        .map_err(Clone::clone)
        .context("Failed to resolve EIA configuration")?;

    let _guard = setup_logging(APP_NAME, LoggerLocalOptions::from_env())
        .context("Failed to initialize logging")?;

    let client = EiaClient::new(config);

    let activities = client
        .fetch_facets(INTERNATIONAL_ROUTE, ACTIVITY_FACET)
        .context("Failed to fetch international activity facets")?;
    let activities = parse_facets(&activities)?;
    let labels = serde_json::to_string_pretty(&facet_labels(&activities))?;
    info!(count = activities.len(), "activity facets received");

    let products = client
        .fetch_facets(INTERNATIONAL_ROUTE, PRODUCT_FACET)
        .context("Failed to fetch international product facets")?;
    let products = parse_facets(&products)?;
    let crude = find_facet_by_name(&products, CRUDE_OIL);
    if crude.is_none() {
        warn!(count = products.len(), "no product facet matches {:?}", CRUDE_OIL);
    }
    let crude = serde_json::to_string_pretty(&crude)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Activity IDs: {}", labels)?;
    writeln!(out, "Crude Oil Product ID: {}", crude)?;
    out.flush()?;

    Ok(())
}
