//! Surface declaration and validation.

use crate::model::attribute::{is_valid_identifier, AttributeSpec, AttributeSpecError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Declarative description of one parameter surface.
///
/// A descriptor is the template a [`crate::surface::parameter_surface::ParameterSurface`]
/// is instantiated from: a stable name, a display name and the full list of
/// attribute declarations in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDescriptor {
    /// Stable surface identifier, e.g. `gaussian_blur`.
    pub name: String,
    /// Human-readable name for pickers.
    pub display_name: String,
    /// Attribute declarations in presentation order.
    pub attributes: Vec<AttributeSpec>,
}

impl SurfaceDescriptor {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        attributes: Vec<AttributeSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            attributes,
        }
    }

    /// Validates declaration-level surface invariants.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.name.trim().is_empty() {
            return Err(DescriptorError::EmptyName);
        }
        if !is_valid_identifier(self.name.trim()) {
            return Err(DescriptorError::InvalidName(self.name.clone()));
        }
        if self.display_name.trim().is_empty() {
            return Err(DescriptorError::EmptyDisplayName(self.name.clone()));
        }
        if self.attributes.is_empty() {
            return Err(DescriptorError::NoAttributes(self.name.clone()));
        }

        let mut dedup = BTreeSet::<&str>::new();
        for spec in &self.attributes {
            spec.validate()
                .map_err(|source| DescriptorError::InvalidAttribute {
                    surface: self.name.clone(),
                    source,
                })?;
            if !dedup.insert(spec.key.as_str()) {
                return Err(DescriptorError::DuplicateAttributeKey {
                    surface: self.name.clone(),
                    key: spec.key.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Surface declaration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorError {
    EmptyName,
    InvalidName(String),
    EmptyDisplayName(String),
    NoAttributes(String),
    InvalidAttribute {
        surface: String,
        source: AttributeSpecError,
    },
    DuplicateAttributeKey {
        surface: String,
        key: String,
    },
}

impl Display for DescriptorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "surface name must not be empty"),
            Self::InvalidName(name) => write!(f, "surface name is invalid: `{name}`"),
            Self::EmptyDisplayName(name) => {
                write!(f, "surface `{name}` display name must not be empty")
            }
            Self::NoAttributes(name) => {
                write!(f, "surface `{name}` must declare at least one attribute")
            }
            Self::InvalidAttribute { surface, source } => {
                write!(f, "surface `{surface}` declaration is invalid: {source}")
            }
            Self::DuplicateAttributeKey { surface, key } => {
                write!(f, "surface `{surface}` declares attribute `{key}` twice")
            }
        }
    }
}

impl Error for DescriptorError {}
