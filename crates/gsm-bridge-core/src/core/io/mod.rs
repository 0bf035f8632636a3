//! Provides input/output functionality for the quantum-chemistry text formats
//! handled by the converter.
//!
//! Readers parse the `energy` and `gradient` files written by xtb and Turbomole;
//! writers emit the ORCA `.engrad` file and the dummy `.out` log consumed by
//! the growing-string driver. Both sides share the [`traits::QmReader`] and
//! [`traits::QmWriter`] interfaces.

pub mod engrad;
pub mod error;
pub mod fortran;
pub mod orca_out;
pub mod traits;
pub mod turbomole;
