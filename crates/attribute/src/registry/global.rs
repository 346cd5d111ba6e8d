//! Process-wide registry instance.
//!
//! Constructed on first use, so it exists before any variant registers.

use std::sync::{Arc, LazyLock};

use super::TypeRegistry;
use crate::error::RegistryError;
use crate::types::AttributeType;

static ATTRIBUTE_TYPES: LazyLock<TypeRegistry> = LazyLock::new(TypeRegistry::new);

/// The process-wide registry.
pub fn attribute_types() -> &'static TypeRegistry {
	&ATTRIBUTE_TYPES
}

/// Registers `alias` in the process-wide registry. See [`TypeRegistry::register`].
pub fn register(alias: &str) -> Result<AttributeType, RegistryError> {
	ATTRIBUTE_TYPES.register(alias)
}

/// Tag of `alias` in the process-wide registry.
pub fn attribute_type(alias: &str) -> Option<AttributeType> {
	ATTRIBUTE_TYPES.attribute_type(alias)
}

/// Alias at the lowest set bit of `bits` in the process-wide registry.
pub fn attribute_alias(bits: u64) -> Option<Arc<str>> {
	ATTRIBUTE_TYPES.attribute_alias(bits)
}
