//! Numeric key space shared by every taxonomy.

use std::fmt;

/// First key of the synthetic namespace.
///
/// Authoritative keys are registry-assigned integers well below this bound;
/// the dataset loader rejects records at or above it.
pub const SYNTHETIC_BASE: u32 = 0x8000_0000;

/// Numeric identifier unifying all taxonomies' views of one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharsetKey(u32);

impl CharsetKey {
	/// Wraps a raw key value.
	pub const fn new(raw: u32) -> Self {
		Self(raw)
	}

	/// Returns the raw key value.
	pub const fn get(self) -> u32 {
		self.0
	}

	/// Returns true if this key was minted by a [`SyntheticKeyAllocator`].
	///
	/// [`SyntheticKeyAllocator`]: crate::core::SyntheticKeyAllocator
	pub const fn is_synthetic(self) -> bool {
		self.0 >= SYNTHETIC_BASE
	}

	/// Returns true if this key lies in the authoritative range.
	pub const fn is_authoritative(self) -> bool {
		!self.is_synthetic()
	}
}

impl From<u32> for CharsetKey {
	fn from(raw: u32) -> Self {
		Self(raw)
	}
}

impl fmt::Display for CharsetKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_synthetic() {
			write!(f, "synthetic:{}", self.0 - SYNTHETIC_BASE)
		} else {
			write!(f, "{}", self.0)
		}
	}
}

/// An authoritative registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalEntry {
	pub key: CharsetKey,
	/// Registry-assigned display name.
	pub name: Box<str>,
	/// Preferred MIME spelling, when the registry names one.
	pub preferred: Option<Box<str>>,
}

impl CanonicalEntry {
	/// Returns the preferred MIME spelling, falling back to the canonical name.
	pub fn mime_name(&self) -> &str {
		self.preferred.as_deref().unwrap_or(&self.name)
	}
}
