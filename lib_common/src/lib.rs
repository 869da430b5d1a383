//! Shared library for the EIA diagnostics tools.
//!
//! Each top-level module sits behind the feature of the same name; `full`
//! (the default) enables all of them.

#[cfg(feature = "configs")]
pub mod configs;
#[cfg(feature = "loggers")]
pub mod loggers;
#[cfg(feature = "markets")]
pub mod markets;
#[cfg(feature = "retrieve")]
pub mod retrieve;

#[cfg(all(test, feature = "retrieve"))]
mod test_support;
