//! Parameter surfaces: declarations, live instances, builtin catalog.
//!
//! # Responsibility
//! - Declare surfaces as validated attribute rosters.
//! - Instantiate live surfaces that honor the keyed-access contract.
//! - Ship the builtin effect roster behind a name-keyed catalog.
//!
//! # Invariants
//! - Only validated descriptors enter a catalog or become surfaces.
//! - Surface names are unique within a catalog.

pub mod catalog;
pub mod descriptor;
pub mod parameter_surface;
