//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hold the process-wide surface selection behind a lock.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Parameter reads never fail: missing values collapse to typed defaults.
//! - Parameter writes report non-suppressible failures through the envelope.

use log::info;
use parambench_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ImageRef, ParameterSurface, Rgba, SafeAccess, SurfaceCatalog, Value, Vector4,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

const INPUT_IMAGE_KEY: &str = "input_image";
const NO_SURFACE_MESSAGE: &str = "No surface selected.";

static CATALOG: OnceLock<SurfaceCatalog> = OnceLock::new();
static ACTIVE_SURFACE: Mutex<Option<ParameterSurface>> = Mutex::new(None);

fn catalog() -> &'static SurfaceCatalog {
    CATALOG.get_or_init(SurfaceCatalog::builtin)
}

fn active_surface_lock() -> MutexGuard<'static, Option<ParameterSurface>> {
    // A panicking call must not wedge every later call; the surface state
    // itself is always valid, so recover it as-is.
    ACTIVE_SURFACE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for surface and parameter commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ParamActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Editor metadata for one declared attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamAttributeItem {
    /// Stable attribute key, e.g. `radius`.
    pub key: String,
    /// Human-readable label.
    pub display_name: String,
    /// Editor help text; may be empty.
    pub description: String,
    /// Value kind id (`null|number|text|vector|color|image`).
    pub kind: String,
    /// Whether writes are rejected by declaration.
    pub read_only: bool,
    /// Effective slider lower bound (meaningful for number kind).
    pub min: f64,
    /// Effective slider upper bound (meaningful for number kind).
    pub max: f64,
    /// Editor step hint; `0` means the host picks freely.
    pub step: f64,
}

/// Four-component vector payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamVectorItem {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl ParamVectorItem {
    fn from_vector(vector: Vector4) -> Self {
        Self {
            x: vector.x,
            y: vector.y,
            z: vector.z,
            w: vector.w,
        }
    }

    fn into_vector(self) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, self.w)
    }
}

/// RGBA color payload with unit-interval channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamColorItem {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ParamColorItem {
    fn from_color(color: Rgba) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }

    fn into_color(self) -> Rgba {
        Rgba::new(self.r, self.g, self.b, self.a)
    }
}

/// By-reference image payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamImageItem {
    /// Host-side asset identifier.
    pub id: String,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
}

impl ParamImageItem {
    fn from_image(image: &ImageRef) -> Self {
        Self {
            id: image.id.clone(),
            width: image.width,
            height: image.height,
        }
    }

    fn into_image(self) -> ImageRef {
        ImageRef::new(self.id, self.width, self.height)
    }
}

/// Returns the sorted names of every registered surface.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; the builtin roster is always available.
#[flutter_rust_bridge::frb(sync)]
pub fn list_surfaces() -> Vec<String> {
    catalog().surface_names()
}

/// Selects the active surface by name.
///
/// The current input image carries over to the new surface when it declares
/// one; surfaces without an image slot simply ignore the carried value.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; unknown names return a failure envelope and leave the
///   previous selection active.
#[flutter_rust_bridge::frb(sync)]
pub fn select_surface(name: String) -> ParamActionResponse {
    let normalized = name.trim();
    let mut active = active_surface_lock();

    let Some(mut surface) = catalog().instantiate(normalized) else {
        return ParamActionResponse::failure(format!("surface not found: {normalized}"));
    };

    let carried = active
        .as_ref()
        .and_then(|previous| previous.safe_attribute(INPUT_IMAGE_KEY).ok())
        .filter(|value| !value.is_null());
    if let Some(image) = carried {
        let _ = surface.set_safe_attribute(INPUT_IMAGE_KEY, image);
    }

    info!(
        "event=surface_select module=ffi status=ok name={}",
        surface.name()
    );
    *active = Some(surface);
    ParamActionResponse::success(format!("Surface `{normalized}` selected."))
}

/// Returns the active surface name, or an empty string when none is selected.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn active_surface_name() -> String {
    active_surface_lock()
        .as_ref()
        .map(|surface| surface.name().to_string())
        .unwrap_or_default()
}

/// Returns editor metadata for every attribute of the active surface.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; returns an empty list when no surface is selected.
#[flutter_rust_bridge::frb(sync)]
pub fn surface_attributes() -> Vec<ParamAttributeItem> {
    let active = active_surface_lock();
    let Some(surface) = active.as_ref() else {
        return Vec::new();
    };
    surface
        .specs()
        .into_iter()
        .map(|spec| {
            let (min, max) = spec.slider_range();
            ParamAttributeItem {
                key: spec.key.clone(),
                display_name: spec.display_name.clone(),
                description: spec.description.clone(),
                kind: spec.kind.as_str().to_string(),
                read_only: !spec.is_writable(),
                min,
                max,
                step: spec.preferred_step(),
            }
        })
        .collect()
}

/// Reads one number parameter; missing or non-number values read as `0`.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn param_number(key: String) -> f64 {
    read_active(&key).number_or_zero()
}

/// Writes one number parameter.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
/// - Unknown keys are accepted silently; kind and mutability violations
///   return a failure envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn set_param_number(key: String, value: f64) -> ParamActionResponse {
    write_active("set_param_number", &key, Value::from(value))
}

/// Reads one text parameter; missing or non-text values read as `""`.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn param_text(key: String) -> String {
    read_active(&key)
        .as_text()
        .map(str::to_string)
        .unwrap_or_default()
}

/// Writes one text parameter.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
/// - Unknown keys are accepted silently; kind and mutability violations
///   return a failure envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn set_param_text(key: String, value: String) -> ParamActionResponse {
    write_active("set_param_text", &key, Value::from(value))
}

/// Reads one vector parameter; missing or non-vector values read as zero.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn param_vector(key: String) -> ParamVectorItem {
    ParamVectorItem::from_vector(read_active(&key).vector_or_zero())
}

/// Writes one vector parameter.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
/// - Unknown keys are accepted silently; kind and mutability violations
///   return a failure envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn set_param_vector(key: String, value: ParamVectorItem) -> ParamActionResponse {
    write_active("set_param_vector", &key, Value::from(value.into_vector()))
}

/// Reads one color parameter; missing or non-color values read as
/// transparent.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn param_color(key: String) -> ParamColorItem {
    ParamColorItem::from_color(read_active(&key).color_or_transparent())
}

/// Writes one color parameter.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
/// - Unknown keys are accepted silently; kind and mutability violations
///   return a failure envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn set_param_color(key: String, value: ParamColorItem) -> ParamActionResponse {
    write_active("set_param_color", &key, Value::from(value.into_color()))
}

/// Reads one image parameter; missing or non-image values read as `None`.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn param_image(key: String) -> Option<ParamImageItem> {
    read_active(&key)
        .as_image()
        .map(ParamImageItem::from_image)
}

/// Writes one image parameter; `None` clears the slot.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
/// - Unknown keys are accepted silently; kind and mutability violations
///   return a failure envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn set_param_image(key: String, image: Option<ParamImageItem>) -> ParamActionResponse {
    let value = match image {
        Some(item) => Value::from(item.into_image()),
        None => Value::Null,
    };
    write_active("set_param_image", &key, value)
}

/// Restores every parameter of the active surface to its declared default.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
/// - Returns a failure envelope when no surface is selected.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_surface() -> ParamActionResponse {
    let mut active = active_surface_lock();
    let Some(surface) = active.as_mut() else {
        return ParamActionResponse::failure(NO_SURFACE_MESSAGE);
    };
    surface.reset_to_defaults();
    info!(
        "event=surface_reset module=ffi status=ok name={}",
        surface.name()
    );
    ParamActionResponse::success("Surface reset to defaults.")
}

fn read_active(key: &str) -> Value {
    let active = active_surface_lock();
    match active.as_ref() {
        Some(surface) => surface.safe_attribute(key).unwrap_or(Value::Null),
        None => Value::Null,
    }
}

fn write_active(label: &str, key: &str, value: Value) -> ParamActionResponse {
    let mut active = active_surface_lock();
    let Some(surface) = active.as_mut() else {
        return ParamActionResponse::failure(NO_SURFACE_MESSAGE);
    };
    match surface.set_safe_attribute(key, value) {
        Ok(()) => ParamActionResponse::success(format!("Parameter `{key}` accepted.")),
        Err(err) => ParamActionResponse::failure(format!("{label} failed: {err}")),
    }
}
