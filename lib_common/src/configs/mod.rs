//! # Configuration Modules
//!
//! This module aggregates the configuration providers used by the data API
//! clients.

/// Resolves the EIA API key and base URL from overrides, the environment and `.env`.
pub mod config_eia;
