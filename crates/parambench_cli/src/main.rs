//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `parambench_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use parambench_core::{SafeAccess, SurfaceCatalog, Value};

fn main() {
    println!("parambench_core ping={}", parambench_core::ping());
    println!("parambench_core version={}", parambench_core::core_version());

    let catalog = SurfaceCatalog::builtin();
    println!("surfaces={}", catalog.surface_names().join(","));

    let Some(mut surface) = catalog.instantiate("gaussian_blur") else {
        eprintln!("builtin surface missing: gaussian_blur");
        std::process::exit(1);
    };

    let radius = surface
        .safe_attribute("radius")
        .map(|value| value.number_or_zero())
        .unwrap_or(0.0);
    println!("gaussian_blur radius={radius}");

    let ghost = surface
        .safe_attribute("ghost")
        .map(|value| value.is_null())
        .unwrap_or(false);
    println!("gaussian_blur ghost_is_null={ghost}");

    if surface.set_safe_attribute("radius", Value::from(25.0)).is_ok() {
        let updated = surface
            .safe_attribute("radius")
            .map(|value| value.number_or_zero())
            .unwrap_or(0.0);
        println!("gaussian_blur radius_after_set={updated}");
    }
}
