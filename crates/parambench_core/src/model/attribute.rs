//! Declared attribute metadata for parameter surfaces.
//!
//! # Responsibility
//! - Describe one keyed attribute: kind, default, UI hints, mutability.
//! - Validate declarations before a surface or catalog accepts them.
//!
//! # Invariants
//! - `key` is lowercase `[a-z0-9_]`, starts with a letter, no trailing or
//!   doubled underscore.
//! - A non-null `default` always matches the declared `kind`.
//! - Slider bounds are declared only for writable number attributes.

use crate::model::value::{Rgba, Value, ValueKind, Vector4};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slider range fallback when a number attribute declares no bounds.
const DEFAULT_SLIDER_RANGE: (f64, f64) = (0.0, 1.0);

/// Mutability mode for one declared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeAccessMode {
    /// Host callers may read and write the attribute.
    ReadWrite,
    /// The attribute is readable but rejects writes.
    ReadOnly,
}

/// Declaration-time description of one keyed attribute.
///
/// Specs carry everything a host UI needs to render an editor for the
/// attribute: a display name, the value kind, the initial value and optional
/// slider bounds for number kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSpec {
    /// Stable lookup key, e.g. `radius`.
    pub key: String,
    /// Human-readable name for editor labels.
    pub display_name: String,
    /// Longer editor help text; may be empty.
    pub description: String,
    /// Declared value kind checked on every write.
    pub kind: ValueKind,
    /// Initial value applied at surface construction and on reset.
    pub default: Value,
    /// Lower slider bound; meaningful for `Number` kind only.
    pub min: Option<f64>,
    /// Upper slider bound; meaningful for `Number` kind only.
    pub max: Option<f64>,
    /// Mutability mode.
    pub access: AttributeAccessMode,
}

impl AttributeSpec {
    /// Creates a writable number attribute with the given default.
    pub fn number(key: impl Into<String>, display_name: impl Into<String>, default: f64) -> Self {
        Self::with_kind_and_default(key, display_name, ValueKind::Number, Value::from(default))
    }

    /// Creates a writable text attribute with the given default.
    pub fn text(
        key: impl Into<String>,
        display_name: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self::with_kind_and_default(
            key,
            display_name,
            ValueKind::Text,
            Value::Text(default.into()),
        )
    }

    /// Creates a writable vector attribute with the given default.
    pub fn vector(
        key: impl Into<String>,
        display_name: impl Into<String>,
        default: Vector4,
    ) -> Self {
        Self::with_kind_and_default(key, display_name, ValueKind::Vector, Value::Vector(default))
    }

    /// Creates a writable color attribute with the given default.
    pub fn color(key: impl Into<String>, display_name: impl Into<String>, default: Rgba) -> Self {
        Self::with_kind_and_default(key, display_name, ValueKind::Color, Value::Color(default))
    }

    /// Creates a writable image attribute.
    ///
    /// Image attributes always start null; a host supplies the asset later.
    pub fn image(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::with_kind_and_default(key, display_name, ValueKind::Image, Value::Null)
    }

    /// Creates a read-only attribute of the given kind with a null default.
    pub fn read_only(
        key: impl Into<String>,
        display_name: impl Into<String>,
        kind: ValueKind,
    ) -> Self {
        let mut spec = Self::with_kind_and_default(key, display_name, kind, Value::Null);
        spec.access = AttributeAccessMode::ReadOnly;
        spec
    }

    fn with_kind_and_default(
        key: impl Into<String>,
        display_name: impl Into<String>,
        kind: ValueKind,
        default: Value,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            description: String::new(),
            kind,
            default,
            min: None,
            max: None,
            access: AttributeAccessMode::ReadWrite,
        }
    }

    /// Sets editor help text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declares slider bounds for a number attribute.
    pub fn with_slider(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Returns whether writes are allowed by declaration.
    pub fn is_writable(&self) -> bool {
        self.access == AttributeAccessMode::ReadWrite
    }

    /// Returns the effective slider range for editor construction.
    ///
    /// Attributes without declared bounds fall back to `0.0..=1.0`.
    pub fn slider_range(&self) -> (f64, f64) {
        match (self.min, self.max) {
            (Some(min), Some(max)) => (min, max),
            _ => DEFAULT_SLIDER_RANGE,
        }
    }

    /// Returns the editor step size derived from the slider maximum.
    ///
    /// - `max <= 1` -> `0.01`
    /// - `max <= 100` -> `0.1`
    /// - larger -> `1.0`
    /// - no declared maximum -> `0.0` (host picks freely)
    pub fn preferred_step(&self) -> f64 {
        match self.max {
            Some(max) if max <= 1.0 => 0.01,
            Some(max) if max <= 100.0 => 0.1,
            Some(_) => 1.0,
            None => 0.0,
        }
    }

    /// Validates declaration-level invariants.
    ///
    /// # Errors
    /// Returns the first violated rule; surfaces and catalogs refuse
    /// declarations that do not pass.
    pub fn validate(&self) -> Result<(), AttributeSpecError> {
        if self.key.trim().is_empty() {
            return Err(AttributeSpecError::EmptyKey);
        }
        if !is_valid_identifier(&self.key) {
            return Err(AttributeSpecError::InvalidKey(self.key.clone()));
        }
        if self.kind == ValueKind::Null {
            return Err(AttributeSpecError::NullKind(self.key.clone()));
        }
        if !self.default.is_null() && self.default.kind() != self.kind {
            return Err(AttributeSpecError::DefaultKindMismatch {
                key: self.key.clone(),
                declared: self.kind,
                default: self.default.kind(),
            });
        }

        let has_bounds = self.min.is_some() || self.max.is_some();
        if has_bounds {
            if self.kind != ValueKind::Number {
                return Err(AttributeSpecError::SliderOnNonNumber {
                    key: self.key.clone(),
                    kind: self.kind,
                });
            }
            if !self.is_writable() {
                return Err(AttributeSpecError::SliderOnReadOnly(self.key.clone()));
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(AttributeSpecError::InvalidSliderRange {
                    key: self.key.clone(),
                    min,
                    max,
                });
            }
        }

        Ok(())
    }
}

/// Attribute declaration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeSpecError {
    EmptyKey,
    InvalidKey(String),
    NullKind(String),
    DefaultKindMismatch {
        key: String,
        declared: ValueKind,
        default: ValueKind,
    },
    SliderOnNonNumber {
        key: String,
        kind: ValueKind,
    },
    SliderOnReadOnly(String),
    InvalidSliderRange {
        key: String,
        min: f64,
        max: f64,
    },
}

impl Display for AttributeSpecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "attribute key must not be empty"),
            Self::InvalidKey(key) => write!(f, "attribute key is invalid: `{key}`"),
            Self::NullKind(key) => {
                write!(f, "attribute `{key}` must declare a non-null kind")
            }
            Self::DefaultKindMismatch {
                key,
                declared,
                default,
            } => write!(
                f,
                "attribute `{key}` declares kind {declared} but its default is {default}"
            ),
            Self::SliderOnNonNumber { key, kind } => write!(
                f,
                "attribute `{key}` declares slider bounds but has kind {kind}"
            ),
            Self::SliderOnReadOnly(key) => write!(
                f,
                "read-only attribute `{key}` must not declare slider bounds"
            ),
            Self::InvalidSliderRange { key, min, max } => write!(
                f,
                "attribute `{key}` slider range is reversed: min {min} > max {max}"
            ),
        }
    }
}

impl Error for AttributeSpecError {}

/// Returns whether `value` is a valid surface or attribute identifier.
///
/// Identifiers are lowercase `[a-z0-9_]`, start with a letter and never end
/// with or double an underscore.
pub(crate) fn is_valid_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() {
        return false;
    }

    let mut prev_underscore = false;
    for c in chars {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            prev_underscore = false;
            continue;
        }
        if c == '_' {
            if prev_underscore {
                return false;
            }
            prev_underscore = true;
            continue;
        }
        return false;
    }
    !prev_underscore
}
