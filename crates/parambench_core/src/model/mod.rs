//! Domain model for attribute values and declarations.
//!
//! # Responsibility
//! - Define the dynamic value representation exchanged through surfaces.
//! - Define declaration metadata that surfaces validate against.
//!
//! # Invariants
//! - Stored numeric components are always finite.
//! - A validated declaration never pairs a non-null default with a
//!   mismatching kind.

pub mod attribute;
pub mod value;
