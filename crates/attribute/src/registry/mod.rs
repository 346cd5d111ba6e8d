//! Alias-to-bit registry with atomic publication.
//!
//! # Purpose
//!
//! Assign each attribute kind a bit position and resolve between aliases and
//! tags in both directions.
//!
//! # Mental model
//!
//! * The alias sequence lives in an immutable [`AliasTable`] snapshot.
//! * Readers load the current snapshot and answer from it without locking.
//! * [`TypeRegistry::register`] builds a successor snapshot and publishes it
//!   with CAS. A failed CAS means another writer won; the loop retries from the
//!   latest snapshot, which may already contain the alias.
//!
//! # Invariants
//!
//! - Aliases are unique and the k-th registered alias has tag `1 << k`.
//!   - Enforced in: [`TypeRegistry::register`].
//!   - Tested by: `invariants::test_positions_follow_registration_order`
//! - The table never shrinks and never exceeds the configured capacity.
//!   - Enforced in: [`TypeRegistry::register`] (capacity check inside the CAS loop).
//!   - Tested by: `invariants::test_capacity_is_a_hard_ceiling`
//! - Concurrent registrations are linearizable with no lost aliases.
//!   - Enforced in: [`TypeRegistry::register`].
//!   - Tested by: `invariants::test_no_lost_registrations`
//!
//! # Concurrency
//!
//! - Reads: wait-free (`ArcSwap` load).
//! - Writes: lock-free CAS retry loop.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::attribute::{Attribute, UNKNOWN_ALIAS};
use crate::config::RegistryConfig;
use crate::error::{ConfigError, RegistryError};
use crate::types::{AttributeMask, AttributeType};

mod global;
mod snapshot;

pub use global::{attribute_alias, attribute_type, attribute_types, register};
use snapshot::AliasTable;

#[cfg(test)]
mod invariants;

/// Table of registered attribute kinds.
///
/// Most code uses the process-wide instance from [`attribute_types`]; separate
/// instances are useful when a subsystem wants its own bit space.
pub struct TypeRegistry {
	label: String,
	capacity: usize,
	snap: ArcSwap<AliasTable>,
}

impl TypeRegistry {
	/// Creates an empty registry with the default configuration.
	pub fn new() -> Self {
		Self::from_valid_config(RegistryConfig::default())
	}

	/// Creates an empty registry after validating `config`.
	pub fn with_config(config: RegistryConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self::from_valid_config(config))
	}

	fn from_valid_config(config: RegistryConfig) -> Self {
		Self {
			label: config.label,
			capacity: config.capacity,
			snap: ArcSwap::from_pointee(AliasTable::default()),
		}
	}

	/// Name used in log output.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Maximum number of aliases this registry accepts.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Number of registered aliases.
	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	/// Returns true if nothing has been registered.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns true if `alias` is registered.
	pub fn contains(&self, alias: &str) -> bool {
		self.attribute_type(alias).is_some()
	}

	/// Tag of a registered alias. Comparison is exact and case-sensitive.
	#[inline]
	pub fn attribute_type(&self, alias: &str) -> Option<AttributeType> {
		self.snap.load().get(alias)
	}

	/// Alias at the lowest set bit of `bits`.
	///
	/// `None` for zero, for a lowest bit at position 63, and for positions not
	/// yet registered.
	#[inline]
	pub fn attribute_alias(&self, bits: u64) -> Option<Arc<str>> {
		self.snap.load().alias_at_lowest_bit(bits).cloned()
	}

	/// Alias of `ty`, if registered in this registry.
	pub fn alias_of(&self, ty: AttributeType) -> Option<Arc<str>> {
		self.attribute_alias(ty.bits())
	}

	/// All aliases in registration order.
	pub fn aliases(&self) -> Vec<Arc<str>> {
		self.snap.load().aliases().to_vec()
	}

	/// Registers `alias`, returning its tag.
	///
	/// Idempotent: a known alias returns its existing tag and never grows the
	/// table, even at capacity. Concurrent callers registering the same alias
	/// all receive the same tag.
	///
	/// # Errors
	///
	/// [`RegistryError::CapacityExceeded`] if `alias` is new and the table
	/// already holds [`Self::capacity`] aliases. Nothing is registered.
	pub fn register(&self, alias: &str) -> Result<AttributeType, RegistryError> {
		loop {
			let old = self.snap.load_full();

			if let Some(existing) = old.get(alias) {
				tracing::trace!(registry = %self.label, alias, position = existing.position(), "attribute type already registered");
				return Ok(existing);
			}

			if old.len() >= self.capacity {
				tracing::error!(registry = %self.label, alias, capacity = self.capacity, "attribute type registry is full");
				return Err(RegistryError::CapacityExceeded {
					alias: alias.to_string(),
					capacity: self.capacity,
				});
			}

			let (next, ty) = old.with_alias(alias);
			let prev = self.snap.compare_and_swap(&old, Arc::new(next));

			if Arc::ptr_eq(&prev, &old) {
				tracing::debug!(registry = %self.label, alias, position = ty.position(), "registered attribute type");
				return Ok(ty);
			}
			tracing::trace!(registry = %self.label, alias, "attribute type registration raced, retrying");
		}
	}

	/// Combined mask of the given aliases.
	///
	/// # Errors
	///
	/// [`RegistryError::UnknownAlias`] for the first alias that is not registered.
	pub fn mask_of<'a, I>(&self, aliases: I) -> Result<AttributeMask, RegistryError>
	where
		I: IntoIterator<Item = &'a str>,
	{
		let snap = self.snap.load();
		let mut mask = AttributeMask::empty();
		for alias in aliases {
			let ty = snap.get(alias).ok_or_else(|| RegistryError::UnknownAlias { alias: alias.to_string() })?;
			mask |= ty.mask();
		}
		Ok(mask)
	}

	/// Aliases of every registered bit in `mask`, ascending bit order.
	pub fn aliases_in(&self, mask: AttributeMask) -> Vec<Arc<str>> {
		let snap = self.snap.load();
		mask.types().filter_map(|ty| snap.alias_at_lowest_bit(ty.bits()).cloned()).collect()
	}

	/// Alias for an attribute's type, or [`UNKNOWN_ALIAS`] if this registry
	/// never issued that tag.
	pub fn describe(&self, attribute: &dyn Attribute) -> Arc<str> {
		self.alias_of(attribute.attribute_type()).unwrap_or_else(|| Arc::from(UNKNOWN_ALIAS))
	}
}

impl Default for TypeRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeRegistry")
			.field("label", &self.label)
			.field("capacity", &self.capacity)
			.field("aliases", &self.snap.load().aliases())
			.finish()
	}
}
