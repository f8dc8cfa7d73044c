//! Core domain logic for ParamBench.
//! This crate is the single source of truth for keyed-access invariants.

pub mod access;
pub mod logging;
pub mod model;
pub mod surface;

pub use access::capability::{AccessError, AccessResult, AttributeAccess};
pub use access::safe::SafeAccess;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::attribute::{AttributeAccessMode, AttributeSpec, AttributeSpecError};
pub use model::value::{ImageRef, Rgba, Value, ValueKind, ValueParseError, Vector4};
pub use surface::catalog::{CatalogError, SurfaceCatalog};
pub use surface::descriptor::{DescriptorError, SurfaceDescriptor};
pub use surface::parameter_surface::ParameterSurface;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
