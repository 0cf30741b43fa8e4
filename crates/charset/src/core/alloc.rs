//! Synthetic key minting for taxonomy-only encodings.

use super::key::{CharsetKey, SYNTHETIC_BASE};

/// Mints keys for taxonomy entries with no authoritative counterpart.
///
/// Keys are strictly increasing from [`SYNTHETIC_BASE`] and never reused. One
/// allocator lives for the duration of a registry build, so keys are stable
/// for a given dataset and set of taxonomy enumerations.
#[derive(Debug)]
pub struct SyntheticKeyAllocator {
	next: u32,
}

impl SyntheticKeyAllocator {
	pub const fn new() -> Self {
		Self { next: SYNTHETIC_BASE }
	}

	/// Returns the next unused synthetic key.
	///
	/// # Panics
	///
	/// Panics if the synthetic namespace (2^31 keys) is exhausted.
	pub fn allocate(&mut self) -> CharsetKey {
		let key = CharsetKey::new(self.next);
		self.next = self
			.next
			.checked_add(1)
			.unwrap_or_else(|| panic!("synthetic key namespace exhausted after {key}"));
		tracing::debug!(key = %key, "allocated synthetic key");
		key
	}

	/// Returns true if `key` belongs to the synthetic namespace.
	pub const fn is_synthetic(key: CharsetKey) -> bool {
		key.is_synthetic()
	}

	/// Number of keys minted so far.
	pub const fn allocated(&self) -> u32 {
		self.next - SYNTHETIC_BASE
	}
}

impl Default for SyntheticKeyAllocator {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Allocation is strictly increasing and stays out of the authoritative range.
	#[test]
	fn test_allocate_monotonic() {
		let mut alloc = SyntheticKeyAllocator::new();
		let a = alloc.allocate();
		let b = alloc.allocate();
		assert!(a < b);
		assert!(SyntheticKeyAllocator::is_synthetic(a));
		assert!(SyntheticKeyAllocator::is_synthetic(b));
		assert!(!SyntheticKeyAllocator::is_synthetic(CharsetKey::new(2252)));
		assert_eq!(alloc.allocated(), 2);
	}

	/// Synthetic keys render with their namespace tag.
	#[test]
	fn test_synthetic_display() {
		let mut alloc = SyntheticKeyAllocator::new();
		assert_eq!(alloc.allocate().to_string(), "synthetic:0");
		assert_eq!(CharsetKey::new(3).to_string(), "3");
	}
}
