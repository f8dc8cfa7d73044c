//! Live parameter surface instantiated from a declaration.
//!
//! # Responsibility
//! - Hold the current value of every declared attribute.
//! - Resolve keyed reads and writes strictly against the declaration.
//!
//! # Invariants
//! - The slot set is fixed at construction; reads and writes never add or
//!   remove slots.
//! - A rejected write leaves every slot value untouched.
//! - Slot order follows the declaration, not key sort order.

use crate::access::capability::{AccessError, AccessResult, AttributeAccess};
use crate::model::attribute::AttributeSpec;
use crate::model::value::Value;
use crate::surface::descriptor::{DescriptorError, SurfaceDescriptor};

#[derive(Debug, Clone, PartialEq)]
struct ParameterSlot {
    spec: AttributeSpec,
    value: Value,
}

/// One live surface: declared attributes plus their current values.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSurface {
    name: String,
    display_name: String,
    slots: Vec<ParameterSlot>,
}

impl ParameterSurface {
    /// Instantiates a surface from a validated declaration.
    ///
    /// Every slot starts at its declared default.
    ///
    /// # Errors
    /// Returns the declaration error when `descriptor` does not validate.
    pub fn new(descriptor: &SurfaceDescriptor) -> Result<Self, DescriptorError> {
        descriptor.validate()?;
        let slots = descriptor
            .attributes
            .iter()
            .map(|spec| ParameterSlot {
                spec: spec.clone(),
                value: spec.default.clone(),
            })
            .collect();
        Ok(Self {
            name: descriptor.name.trim().to_string(),
            display_name: descriptor.display_name.clone(),
            slots,
        })
    }

    /// Returns the stable surface name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the human-readable surface name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the declaration for one attribute.
    pub fn spec(&self, key: &str) -> Option<&AttributeSpec> {
        self.slot(key).map(|slot| &slot.spec)
    }

    /// Returns every attribute declaration in presentation order.
    pub fn specs(&self) -> Vec<&AttributeSpec> {
        self.slots.iter().map(|slot| &slot.spec).collect()
    }

    /// Restores every slot to its declared default.
    pub fn reset_to_defaults(&mut self) {
        for slot in &mut self.slots {
            slot.value = slot.spec.default.clone();
        }
    }

    fn slot(&self, key: &str) -> Option<&ParameterSlot> {
        self.slots.iter().find(|slot| slot.spec.key == key)
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut ParameterSlot> {
        self.slots.iter_mut().find(|slot| slot.spec.key == key)
    }
}

impl AttributeAccess for ParameterSurface {
    fn attribute_keys(&self) -> Vec<&str> {
        self.slots.iter().map(|slot| slot.spec.key.as_str()).collect()
    }

    fn attribute(&self, key: &str) -> AccessResult<Value> {
        if key.trim().is_empty() {
            return Err(AccessError::EmptyKey);
        }
        match self.slot(key) {
            Some(slot) => Ok(slot.value.clone()),
            None => Err(AccessError::UnknownKey {
                key: key.to_string(),
            }),
        }
    }

    fn set_attribute(&mut self, key: &str, value: Value) -> AccessResult<()> {
        if key.trim().is_empty() {
            return Err(AccessError::EmptyKey);
        }
        let Some(slot) = self.slot_mut(key) else {
            return Err(AccessError::UnknownKey {
                key: key.to_string(),
            });
        };
        if !slot.spec.is_writable() {
            return Err(AccessError::ReadOnlyKey {
                key: key.to_string(),
            });
        }
        // Null clears any slot; everything else must match the declared kind.
        if !value.is_null() && value.kind() != slot.spec.kind {
            return Err(AccessError::TypeMismatch {
                key: key.to_string(),
                expected: slot.spec.kind,
                actual: value.kind(),
            });
        }
        slot.value = value;
        Ok(())
    }
}
