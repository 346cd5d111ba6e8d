//! The contract every attribute variant implements.
//!
//! Equality is two-level. [`attributes_eq`] rejects a missing operand, rejects
//! differing type tags, and accepts the same object. Only then does it ask the
//! variant's [`Attribute::value_eq`], which may therefore assume both sides
//! are the same concrete variant.

use std::any::Any;
use std::fmt;

use crate::registry::attribute_types;
use crate::types::AttributeType;


/// Rendered in place of an alias when a tag was never registered.
pub const UNKNOWN_ALIAS: &str = "unknown";

/// A material attribute.
///
/// Implement [`AttributeValue`] instead for plain `Clone + PartialEq` value
/// types; implement this directly when value equality needs custom logic.
pub trait Attribute: Any + fmt::Debug + Send + Sync {
	/// Type tag, fixed at construction.
	fn attribute_type(&self) -> AttributeType;

	/// Independent instance of the same variant with an equal value.
	fn copy(&self) -> Box<dyn Attribute>;

	/// Compares values only. Called by [`attributes_eq`] after the tags have
	/// matched, so `other` has the same type tag as `self`.
	fn value_eq(&self, other: &dyn Attribute) -> bool;
}

/// Value-like attribute variants.
///
/// Provides [`Attribute`] with `copy` through [`Clone`] and `value_eq` through
/// [`PartialEq`].
pub trait AttributeValue: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
	/// Type tag of this instance.
	fn tag(&self) -> AttributeType;
}

impl<T: AttributeValue> Attribute for T {
	fn attribute_type(&self) -> AttributeType {
		self.tag()
	}

	fn copy(&self) -> Box<dyn Attribute> {
		Box::new(self.clone())
	}

	fn value_eq(&self, other: &dyn Attribute) -> bool {
		let other: &dyn Any = other;
		other.downcast_ref::<T>().is_some_and(|other| self == other)
	}
}

/// Two-level attribute equality.
pub fn attributes_eq(a: &dyn Attribute, b: Option<&dyn Attribute>) -> bool {
	let Some(b) = b else {
		return false;
	};
	if a.attribute_type() != b.attribute_type() {
		return false;
	}
	// Tags first: boxed zero-sized variants share one dangling address.
	if std::ptr::addr_eq(a, b) {
		return true;
	}
	a.value_eq(b)
}

impl PartialEq for dyn Attribute {
	fn eq(&self, other: &Self) -> bool {
		attributes_eq(self, Some(other))
	}
}

impl Clone for Box<dyn Attribute> {
	fn clone(&self) -> Self {
		(**self).copy()
	}
}

/// Renders the alias from the process-wide registry.
///
/// Tags issued by a separate [`crate::TypeRegistry`] resolve against the
/// process-wide bit space here, so they render whatever global alias owns that
/// position. Use [`crate::TypeRegistry::describe`] for those.
impl fmt::Display for dyn Attribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match attribute_types().alias_of(self.attribute_type()) {
			Some(alias) => f.write_str(&alias),
			None => f.write_str(UNKNOWN_ALIAS),
		}
	}
}
