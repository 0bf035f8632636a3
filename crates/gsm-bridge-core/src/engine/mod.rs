//! # Engine Module
//!
//! Run-time configuration of a conversion and the error type every workflow
//! step reports through.

pub mod config;
pub mod error;
