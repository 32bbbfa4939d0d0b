//! Common utilities and shared functionality.
//!
//! This module contains helper functions used across the other modules.
//!
//! # Utilities
//!
//! - Logging setup (fern dispatch with colored levels)
//! - Duration strings (`500ms`, `5s`, `10m`, `24h`, `1d`)
//!
//! # Example
//!
//! ```rust,ignore
//! use credswap::common::common::{parse_time_value, setup_logging};
//!
//! setup_logging(&config)?;
//! let interval = parse_time_value("5s");
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
