//! # gsm-bridge Core Library
//!
//! Converts the `energy` and `gradient` files written by xtb or Turbomole into
//! the ORCA-style `.engrad` and `.out` files read by the growing-string (GSM)
//! transition-state driver.
//!
//! ## Architecture
//!
//! The library follows the same three layers as its sibling tools:
//!
//! - **[`core`]: The Foundation.** The element table, plain data records, and
//!   stateless readers/writers for each file format.
//!
//! - **[`engine`]: Configuration and Errors.** The validated
//!   [`engine::config::ConversionConfig`] and the
//!   [`engine::error::ConvertError`] reported by every step.
//!
//! - **[`workflows`]: The Public API.** [`workflows::convert::run`] performs a
//!   full conversion: validate everything, render in memory, write, then rename
//!   the inputs as the completion marker.

pub mod core;
pub mod engine;
pub mod workflows;
