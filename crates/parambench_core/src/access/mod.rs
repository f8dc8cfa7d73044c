//! Keyed attribute access: strict capability plus suppressing wrappers.
//!
//! # Responsibility
//! - Define the get/set seam between parameter hosts and surfaces.
//! - Offer safe variants that neutralize the unrecognized-key failure only.
//!
//! # Invariants
//! - The safe layer never mutates on suppression and never materializes
//!   undeclared keys.
//! - All non-unknown-key failures surface identically on both paths.

pub mod capability;
pub mod safe;
