//! # Data Retrieval Module
//!
//! This module provides a centralized location for generic data retrieval
//! clients, primarily focused on HTTP-based interactions.
//!
//! ## Contained Modules:
//!
//! - **`ky_http`**: A blocking HTTP `ApiClient` built on `reqwest`. It handles
//!   base URL joining, query encoding, status checks and JSON decoding, and
//!   serves as the foundation for the provider clients under `markets`.

/// Blocking HTTP API client for JSON endpoints.
pub mod ky_http;
