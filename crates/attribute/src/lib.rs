//! Bit-tagged type registry for material attributes.
//!
//! Attribute kinds register a string alias once and receive a single-bit
//! [`AttributeType`]. Tags of several kinds OR together into an
//! [`AttributeMask`], so "does this material have X and Y" is one bitwise test.
//!
//! # Sub-modules
//!
//! - [`registry`] - alias table, snapshot publication, process-wide instance
//! - [`attribute`] - the [`Attribute`] contract every variant implements
//! - [`types`] - tag and mask value types
//! - [`config`] - registry label and capacity
//! - [`error`] - registration and configuration errors
//!
//! # Declaring a variant
//!
//! ```
//! use gloss_attribute::{AttributeType, AttributeValue, attribute_types};
//!
//! attribute_types! {
//! 	pub static SHININESS = "shininess";
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct FloatAttribute {
//! 	ty: AttributeType,
//! 	value: f32,
//! }
//!
//! impl AttributeValue for FloatAttribute {
//! 	fn tag(&self) -> AttributeType {
//! 		self.ty
//! 	}
//! }
//!
//! let shine = FloatAttribute { ty: *SHININESS, value: 16.0 };
//! assert_eq!(gloss_attribute::attribute_alias(shine.ty.bits()).as_deref(), Some("shininess"));
//! ```

pub mod attribute;
pub mod config;
pub mod error;
mod macros;
pub mod registry;
pub mod types;

pub use attribute::{Attribute, AttributeValue, UNKNOWN_ALIAS, attributes_eq};
pub use config::RegistryConfig;
pub use error::{ConfigError, RegistryError};
pub use registry::{TypeRegistry, attribute_alias, attribute_type, attribute_types, register};
pub use types::{AttributeMask, AttributeType, MAX_ATTRIBUTE_TYPES};
