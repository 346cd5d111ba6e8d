use thiserror::Error;

/// Registry operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// Every bit position up to the configured capacity is taken.
	#[error("cannot register attribute type {alias:?}: registry is full ({capacity} types)")]
	CapacityExceeded { alias: String, capacity: usize },
	/// A mask was requested for an alias that was never registered.
	#[error("unknown attribute type alias {alias:?}")]
	UnknownAlias { alias: String },
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read registry config: {0}")]
	Read(#[from] std::io::Error),
	#[error("failed to parse registry config: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("registry capacity must be between 1 and {max}, got {capacity}")]
	InvalidCapacity { capacity: usize, max: usize },
}
