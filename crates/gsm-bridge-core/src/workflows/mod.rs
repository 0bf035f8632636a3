//! # Workflows Module
//!
//! High-level entry points that tie the readers, writers and configuration
//! together into complete procedures.
//!
//! - **Conversion Workflow** ([`convert`]) - turns one xtb/Turbomole single
//!   point into the ORCA `.engrad`/`.out` pair expected by the GSM driver and
//!   marks the step complete by renaming the source files.

pub mod convert;
