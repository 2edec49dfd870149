//! # Application Errors
//!
//! Failures of the binary layer: startup I/O and seed-file handling.
//! Domain failures stay in [`docket_core::RegistryError`] and are mapped
//! to HTTP statuses at the API boundary instead of passing through here.

use docket_core::RegistryError;
use thiserror::Error;

/// Errors that can occur while running the docket binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Socket or filesystem failure during startup.
    #[error("I/O error: {0}")]
    Io(String),

    /// The seed file could not be read or parsed.
    #[error("seed file error: {0}")]
    Seed(String),

    /// A seed entry was rejected by the registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
