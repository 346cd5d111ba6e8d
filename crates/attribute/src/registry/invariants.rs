use std::sync::{Arc, Barrier};
use std::thread;

use super::*;
use crate::types::MAX_ATTRIBUTE_TYPES;

/// Invariant: the k-th distinct alias gets tag `1 << k`, and re-registration
/// neither moves it nor grows the table.
pub(crate) fn inv_positions_follow_registration_order() {
	let registry = TypeRegistry::new();
	let aliases = ["diffuse", "specular", "ambient", "emissive", "bump"];

	for (k, alias) in aliases.iter().enumerate() {
		let ty = registry.register(alias).unwrap();
		assert_eq!(ty.bits(), 1 << k, "alias {alias} must occupy bit {k}");
	}
	for (k, alias) in aliases.iter().enumerate().rev() {
		assert_eq!(registry.register(alias).unwrap().position(), k);
	}
	assert_eq!(registry.len(), aliases.len());
}

#[cfg_attr(test, test)]
pub(crate) fn test_positions_follow_registration_order() {
	inv_positions_follow_registration_order()
}

/// Invariant: a registry at capacity refuses new aliases without changing.
pub(crate) fn inv_capacity_is_a_hard_ceiling() {
	let registry = TypeRegistry::new();
	for i in 0..MAX_ATTRIBUTE_TYPES {
		registry.register(&format!("kind-{i}")).unwrap();
	}
	assert_eq!(registry.len(), MAX_ATTRIBUTE_TYPES);

	let before = registry.aliases();
	let err = registry.register("one-too-many").unwrap_err();
	assert!(matches!(err, RegistryError::CapacityExceeded { capacity: MAX_ATTRIBUTE_TYPES, .. }));
	assert_eq!(registry.aliases(), before, "failed registration must not mutate the table");

	let last = registry.register("kind-62").unwrap();
	assert_eq!(last.bits(), 1 << 62);
	assert!((last.bits() as i64) > 0, "highest tag must stay positive as i64");
}

#[cfg_attr(test, test)]
pub(crate) fn test_capacity_is_a_hard_ceiling() {
	inv_capacity_is_a_hard_ceiling()
}

/// Invariant: concurrent registration loses no alias and every racer sees one
/// tag per alias.
pub(crate) fn inv_no_lost_registrations() {
	const THREADS: usize = 8;
	const PER_THREAD: usize = 6;
	const SHARED: [&str; 3] = ["shared-a", "shared-b", "shared-c"];

	let registry = Arc::new(TypeRegistry::new());
	let barrier = Arc::new(Barrier::new(THREADS));

	let handles: Vec<_> = (0..THREADS)
		.map(|t| {
			let registry = Arc::clone(&registry);
			let barrier = Arc::clone(&barrier);
			thread::spawn(move || {
				barrier.wait();
				let mut seen = Vec::new();
				for i in 0..PER_THREAD {
					registry.register(&format!("t{t}-{i}")).unwrap();
					let shared = SHARED[i % SHARED.len()];
					seen.push((shared, registry.register(shared).unwrap()));
				}
				seen
			})
		})
		.collect();

	let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

	assert_eq!(registry.len(), THREADS * PER_THREAD + SHARED.len());
	for (shared, ty) in results.into_iter().flatten() {
		assert_eq!(registry.attribute_type(shared), Some(ty), "racers disagree on {shared}");
	}
	for t in 0..THREADS {
		for i in 0..PER_THREAD {
			assert!(registry.contains(&format!("t{t}-{i}")));
		}
	}

	let mask = registry.mask_of(registry.aliases().iter().map(|a| &**a)).unwrap();
	assert_eq!(mask.bits().count_ones() as usize, registry.len(), "tags must be pairwise disjoint");
}

#[cfg_attr(test, test)]
pub(crate) fn test_no_lost_registrations() {
	inv_no_lost_registrations()
}
