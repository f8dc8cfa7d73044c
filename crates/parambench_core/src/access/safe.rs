//! Suppressing wrappers over strict attribute access.
//!
//! # Responsibility
//! - Turn the unrecognized-key failure into a neutral outcome: reads yield
//!   null, writes become no-ops.
//! - Pass every other access failure through untouched.
//!
//! # Invariants
//! - A suppressed write leaves the target byte-for-byte unchanged; no slot
//!   is created for the unknown key.
//! - Suppression is observable only through debug-level logging.

use crate::access::capability::{AccessResult, AttributeAccess};
use crate::model::value::Value;
use log::debug;

/// Safe variants of keyed read and write.
///
/// The methods resolve through [`AttributeAccess`] and intercept exactly one
/// failure: the key that names no declared attribute. Malformed keys,
/// kind mismatches and read-only violations still surface as errors, since
/// those indicate a broken call rather than an optional attribute.
///
/// Implemented for every [`AttributeAccess`] target via a blanket impl, so
/// callers opt in per call site, not per type.
pub trait SafeAccess: AttributeAccess {
    /// Reads one attribute, yielding null for unrecognized keys.
    ///
    /// A stored null and a suppressed unknown key are indistinguishable in
    /// the return value; callers that need to tell them apart use
    /// [`AttributeAccess::has_attribute`] or the strict read.
    ///
    /// # Errors
    /// Every failure except `UnknownKey` propagates unchanged.
    fn safe_attribute(&self, key: &str) -> AccessResult<Value> {
        match self.attribute(key) {
            Ok(value) => Ok(value),
            Err(err) if err.is_unknown_key() => {
                debug!("event=safe_get module=access status=suppressed key={key}");
                Ok(Value::Null)
            }
            Err(err) => Err(err),
        }
    }

    /// Writes one attribute, discarding the value for unrecognized keys.
    ///
    /// # Errors
    /// Every failure except `UnknownKey` propagates unchanged.
    fn set_safe_attribute(&mut self, key: &str, value: Value) -> AccessResult<()> {
        match self.set_attribute(key, value) {
            Ok(()) => Ok(()),
            Err(err) if err.is_unknown_key() => {
                debug!("event=safe_set module=access status=suppressed key={key}");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

impl<T: AttributeAccess + ?Sized> SafeAccess for T {}
