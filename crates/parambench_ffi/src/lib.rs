//! FRB-facing bindings for the ParamBench core.

pub mod api;
