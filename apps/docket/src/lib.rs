//! # docket
//!
//! Library surface of the docket binary.
//!
//! Exposes the HTTP API and CLI modules so integration tests can build
//! the router without starting a real server.

pub mod api;
pub mod cli;
pub mod error;

pub use error::AppError;
