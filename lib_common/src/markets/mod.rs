//! # Market and Energy Data APIs Module
//!
//! Groups the client implementations for specific public data providers.
//!
//! ## Contained Modules:
//!
//! - **`eia`**: Client and data models for the U.S. Energy Information
//!   Administration open-data API (facet discovery for petroleum and
//!   international datasets).

/// Client for the EIA open-data API v2.
pub mod eia;
