//! # Core Module
//!
//! Stateless building blocks of the converter: the element table, the data
//! records exchanged between formats, and the format readers and writers.
//!
//! - **Element table** ([`elements`]) - symbol to atomic number lookup
//! - **Records** ([`models`]) - energy, geometry and gradient data
//! - **File I/O** ([`io`]) - xtb/Turbomole readers and ORCA writers

pub mod elements;
pub mod io;
pub mod models;
