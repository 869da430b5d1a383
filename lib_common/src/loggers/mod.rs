/// Installs the `tracing` subscriber: stderr console output plus optional rotating JSON files.
pub mod loggerlocal;
