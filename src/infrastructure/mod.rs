//! Infrastructure layer providing external service integrations.
//!
//! This module contains configuration loading, logging setup and the
//! session snapshot export.

pub mod config;
pub mod logging;
pub mod persistence;

pub use config::*;
pub use logging::*;
pub use persistence::*;
