//! Immutable alias table published by [`super::TypeRegistry`].
//!
//! # Invariants
//!
//! - `aliases[i]` and `by_alias[aliases[i]] == i` describe the same entry.
//! - A published table is never mutated; registration builds a successor with
//!   [`AliasTable::with_alias`].

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::types::{AttributeType, MAX_ATTRIBUTE_TYPES};

/// One published version of the alias sequence.
#[derive(Debug, Default)]
pub(crate) struct AliasTable {
	/// Registration order; index is bit position.
	aliases: Vec<Arc<str>>,
	by_alias: FxHashMap<Arc<str>, usize>,
}

impl AliasTable {
	pub(crate) fn len(&self) -> usize {
		self.aliases.len()
	}

	pub(crate) fn aliases(&self) -> &[Arc<str>] {
		&self.aliases
	}

	pub(crate) fn get(&self, alias: &str) -> Option<AttributeType> {
		self.by_alias.get(alias).map(|&position| AttributeType::from_position(position))
	}

	/// Alias at the lowest set bit of `bits`.
	pub(crate) fn alias_at_lowest_bit(&self, bits: u64) -> Option<&Arc<str>> {
		if bits == 0 {
			return None;
		}
		let position = bits.trailing_zeros() as usize;
		if position >= MAX_ATTRIBUTE_TYPES {
			return None;
		}
		self.aliases.get(position)
	}

	/// Successor table with `alias` appended at the next position.
	///
	/// Caller has checked that `alias` is absent and capacity remains.
	pub(crate) fn with_alias(&self, alias: &str) -> (Self, AttributeType) {
		let position = self.aliases.len();
		let alias: Arc<str> = Arc::from(alias);

		let mut aliases = Vec::with_capacity(position + 1);
		aliases.extend(self.aliases.iter().cloned());
		aliases.push(alias.clone());

		let mut by_alias = self.by_alias.clone();
		by_alias.insert(alias, position);

		(Self { aliases, by_alias }, AttributeType::from_position(position))
	}
}
