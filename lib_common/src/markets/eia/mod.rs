//! # EIA Open Data API Integration Module
//!
//! Client and helpers for the U.S. Energy Information Administration open-data
//! API, version 2.
//!
//! ## Contained Modules:
//!
//! - **`apicalleia`**: The `EiaClient`, facet URL building and extraction of
//!   `response.facets` from a reply.
//!
//! - **`facets`**: Pretty-printing of facets to a writer, plus a typed
//!   `Facet` model with label and name-search helpers.
//!
//! - **`spot`**: Latest daily WTI and Brent spot prices (plus the Dubai/Oman
//!   proxy) from the `petroleum/pri/spt/data` endpoint.

/// Client for the EIA facet endpoints.
pub mod apicalleia;
/// Facet rendering and the typed facet model.
pub mod facets;
/// Latest WTI / Brent spot prices from the petroleum spot dataset.
pub mod spot;

/// Route of the weekly/daily petroleum spot price dataset.
pub const SPOT_PRICE_ROUTE: &str = "petroleum/pri/spt";
/// Facet listing the series identifiers of a dataset.
pub const SERIES_FACET: &str = "series";
/// Route of the international energy dataset.
pub const INTERNATIONAL_ROUTE: &str = "international";
/// Facet listing the activities (production, consumption, ...) of the international dataset.
pub const ACTIVITY_FACET: &str = "activityId";
/// Facet listing the products of the international dataset.
pub const PRODUCT_FACET: &str = "productId";

pub use apicalleia::{EiaClient, EiaError};
pub use facets::{Facet, print_facets};
pub use spot::{Benchmark, SpotPrices};
