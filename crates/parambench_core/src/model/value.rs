//! Typed attribute values exchanged through keyed access.
//!
//! # Responsibility
//! - Define every value kind a parameter surface can carry.
//! - Provide typed accessors with UI-friendly fallback defaults.
//!
//! # Invariants
//! - `Vector4` components are always finite; non-finite inputs become `0.0`.
//! - `Rgba` channels are always finite and clamped to `0.0..=1.0`.
//! - `Value::kind()` is total: every variant reports a stable kind id.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static BRACKETED_VECTOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[\s*([^\[\]]*?)\s*\]$").expect("valid bracketed vector regex"));

const VECTOR_COMPONENT_COUNT: usize = 4;

/// Four-component vector payload for position/rect-like parameters.
///
/// Shorter logical vectors (a 2D center point) reuse this shape with the
/// trailing components left at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vector4 {
    /// All-zero vector used as the read fallback.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };

    /// Creates a vector, replacing non-finite components with `0.0`.
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
            z: finite_or_zero(z),
            w: finite_or_zero(w),
        }
    }

    /// Creates a 2D point vector with `z` and `w` at zero.
    pub fn point(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    /// Parses the bracketed text form `[x y z w]`.
    ///
    /// Missing trailing components are zero-filled, so `[2.5]` parses to
    /// `(2.5, 0, 0, 0)` and `[]` parses to the zero vector.
    ///
    /// # Errors
    /// - Returns `ValueParseError::MalformedVector` when the input is not a
    ///   single bracketed group.
    /// - Returns `ValueParseError::NonNumericComponent` when a component does
    ///   not parse as a number.
    /// - Returns `ValueParseError::TooManyComponents` for more than four.
    pub fn parse_bracketed(text: &str) -> Result<Self, ValueParseError> {
        let captures = BRACKETED_VECTOR_RE
            .captures(text.trim())
            .ok_or_else(|| ValueParseError::MalformedVector(text.to_string()))?;

        let body = captures
            .get(1)
            .map(|group| group.as_str())
            .unwrap_or_default();

        let raw_components: Vec<&str> = body.split_whitespace().collect();
        if raw_components.len() > VECTOR_COMPONENT_COUNT {
            return Err(ValueParseError::TooManyComponents {
                input: text.to_string(),
                count: raw_components.len(),
            });
        }

        let mut components = [0.0_f64; VECTOR_COMPONENT_COUNT];
        for (slot, raw) in components.iter_mut().zip(&raw_components) {
            *slot = raw.parse::<f64>().map_err(|_| {
                ValueParseError::NonNumericComponent {
                    input: text.to_string(),
                    component: (*raw).to_string(),
                }
            })?;
        }

        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }

    /// Formats the vector into the bracketed text form `[x y z w]`.
    pub fn to_bracketed(self) -> String {
        format!("[{} {} {} {}]", self.x, self.y, self.z, self.w)
    }
}

/// RGBA color payload with unit-interval channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black used as the read fallback.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Creates a color with channels clamped to `0.0..=1.0`.
    ///
    /// Non-finite color channels become `0.0`; a non-finite alpha becomes
    /// `1.0` (an unspecified alpha means opaque).
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: unit_channel(r, 0.0),
            g: unit_channel(g, 0.0),
            b: unit_channel(b, 0.0),
            a: unit_channel(a, 1.0),
        }
    }

    /// Creates a fully opaque color.
    pub fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

/// By-reference image payload.
///
/// The core never touches pixel data; an image travels as a stable asset id
/// plus its pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Host-side asset identifier.
    pub id: String,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
}

impl ImageRef {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// Stable kind tag for `Value` variants and attribute declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Number,
    Text,
    Vector,
    Color,
    Image,
}

impl ValueKind {
    /// Stable string id used in wire payloads and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Number => "number",
            Self::Text => "text",
            Self::Vector => "vector",
            Self::Color => "color",
            Self::Image => "image",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one value kind from its stable string id.
pub fn parse_value_kind(value: &str) -> Option<ValueKind> {
    match value {
        "null" => Some(ValueKind::Null),
        "number" => Some(ValueKind::Number),
        "text" => Some(ValueKind::Text),
        "vector" => Some(ValueKind::Vector),
        "color" => Some(ValueKind::Color),
        "image" => Some(ValueKind::Image),
        _ => None,
    }
}

/// One attribute value crossing the keyed-access boundary.
///
/// `Null` is a legitimate stored state for any attribute, distinct from the
/// attribute not being declared at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    Null,
    Number(f64),
    Text(String),
    Vector(Vector4),
    Color(Rgba),
    Image(ImageRef),
}

impl Value {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Number(_) => ValueKind::Number,
            Self::Text(_) => ValueKind::Text,
            Self::Vector(_) => ValueKind::Vector,
            Self::Color(_) => ValueKind::Color,
            Self::Image(_) => ValueKind::Image,
        }
    }

    /// Returns whether this value is the null state.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<Vector4> {
        match self {
            Self::Vector(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Rgba> {
        match self {
            Self::Color(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageRef> {
        match self {
            Self::Image(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the number payload or `0.0` for every other state.
    ///
    /// Mirrors the slider read path: a missing or null parameter renders as
    /// zero rather than failing the UI.
    pub fn number_or_zero(&self) -> f64 {
        self.as_number().unwrap_or(0.0)
    }

    /// Returns the vector payload or the zero vector for every other state.
    pub fn vector_or_zero(&self) -> Vector4 {
        self.as_vector().unwrap_or(Vector4::ZERO)
    }

    /// Returns the color payload or transparent for every other state.
    pub fn color_or_transparent(&self) -> Rgba {
        self.as_color().unwrap_or(Rgba::TRANSPARENT)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(finite_or_zero(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vector4> for Value {
    fn from(value: Vector4) -> Self {
        Self::Vector(value)
    }
}

impl From<Rgba> for Value {
    fn from(value: Rgba) -> Self {
        Self::Color(value)
    }
}

impl From<ImageRef> for Value {
    fn from(value: ImageRef) -> Self {
        Self::Image(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Parse errors for textual value forms.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueParseError {
    MalformedVector(String),
    NonNumericComponent { input: String, component: String },
    TooManyComponents { input: String, count: usize },
}

impl Display for ValueParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedVector(input) => {
                write!(f, "vector text is not a bracketed group: `{input}`")
            }
            Self::NonNumericComponent { input, component } => {
                write!(f, "vector component `{component}` is not a number in `{input}`")
            }
            Self::TooManyComponents { input, count } => {
                write!(
                    f,
                    "vector text `{input}` has {count} components (max {VECTOR_COMPONENT_COUNT})"
                )
            }
        }
    }
}

impl Error for ValueParseError {}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn unit_channel(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}
