//! Single-bit type tags and combined masks.

use std::fmt;

/// Number of usable bit positions.
///
/// Tags are stored in a `u64`; position 63 is never handed out so every valid
/// tag is also a positive `i64`.
pub const MAX_ATTRIBUTE_TYPES: usize = 63;

/// Identifies one registered attribute kind.
///
/// Always exactly one bit set, at a position below [`MAX_ATTRIBUTE_TYPES`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeType(u64);

impl AttributeType {
	/// Tag for bit `position`. Callers guarantee `position < MAX_ATTRIBUTE_TYPES`.
	pub(crate) const fn from_position(position: usize) -> Self {
		debug_assert!(position < MAX_ATTRIBUTE_TYPES);
		Self(1 << position)
	}

	/// Validates raw bits as a tag.
	///
	/// Returns `None` unless exactly one bit is set below position 63. This does
	/// not check that the position is registered anywhere.
	pub const fn from_bits(bits: u64) -> Option<Self> {
		if bits.is_power_of_two() && (bits.trailing_zeros() as usize) < MAX_ATTRIBUTE_TYPES {
			Some(Self(bits))
		} else {
			None
		}
	}

	/// Raw mask value.
	pub const fn bits(self) -> u64 {
		self.0
	}

	/// Raw mask value of an optional tag, with zero for "not found".
	pub const fn bits_or_zero(ty: Option<Self>) -> u64 {
		match ty {
			Some(ty) => ty.0,
			None => 0,
		}
	}

	/// Bit position, equal to the alias's registration index.
	pub const fn position(self) -> usize {
		self.0.trailing_zeros() as usize
	}

	/// This tag as a one-element mask.
	pub const fn mask(self) -> AttributeMask {
		AttributeMask::from_bits_retain(self.0)
	}
}

impl fmt::Debug for AttributeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("AttributeType").field(&format_args!("1 << {}", self.position())).finish()
	}
}

bitflags::bitflags! {
	/// Bitwise OR of any number of [`AttributeType`]s.
	///
	/// Bits are assigned at runtime by a registry, so there are no named flags.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct AttributeMask: u64 {
		const _ = !0;
	}
}

impl AttributeMask {
	/// Returns true if `ty` is part of this mask.
	pub const fn has(self, ty: AttributeType) -> bool {
		self.bits() & ty.bits() != 0
	}

	/// Tags set in this mask, in ascending bit order.
	///
	/// Bit 63 is never a valid tag and is skipped.
	pub fn types(self) -> impl Iterator<Item = AttributeType> {
		let mut rest = self.bits();
		std::iter::from_fn(move || {
			while rest != 0 {
				let low = rest & rest.wrapping_neg();
				rest &= !low;
				if let Some(ty) = AttributeType::from_bits(low) {
					return Some(ty);
				}
			}
			None
		})
	}
}

impl From<AttributeType> for AttributeMask {
	fn from(ty: AttributeType) -> Self {
		ty.mask()
	}
}

impl FromIterator<AttributeType> for AttributeMask {
	fn from_iter<I: IntoIterator<Item = AttributeType>>(iter: I) -> Self {
		let mut mask = AttributeMask::empty();
		for ty in iter {
			mask |= ty.mask();
		}
		mask
	}
}

impl std::ops::BitOr for AttributeType {
	type Output = AttributeMask;

	fn bitor(self, rhs: Self) -> AttributeMask {
		self.mask() | rhs.mask()
	}
}

impl std::ops::BitOr<AttributeType> for AttributeMask {
	type Output = AttributeMask;

	fn bitor(self, rhs: AttributeType) -> AttributeMask {
		self | rhs.mask()
	}
}
