//! Registry configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::MAX_ATTRIBUTE_TYPES;

/// Settings for a [`crate::TypeRegistry`].
///
/// ```toml
/// label = "materials"
/// capacity = 32
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
	/// Name used in log output.
	pub label: String,
	/// Maximum number of aliases; at most [`MAX_ATTRIBUTE_TYPES`].
	pub capacity: usize,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			label: "attributes".to_string(),
			capacity: MAX_ATTRIBUTE_TYPES,
		}
	}
}

impl RegistryConfig {
	/// Parses and validates a TOML document. Missing keys take their defaults.
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(content)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads a TOML file and parses it with [`Self::from_toml_str`].
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	/// Checks that the capacity fits the tag width.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.capacity == 0 || self.capacity > MAX_ATTRIBUTE_TYPES {
			return Err(ConfigError::InvalidCapacity {
				capacity: self.capacity,
				max: MAX_ATTRIBUTE_TYPES,
			});
		}
		Ok(())
	}
}
