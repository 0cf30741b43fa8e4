//! Collision vocabulary and duplicate policies.
//!
//! Bulk loading binds thousands of short names and taxonomy spellings. When two
//! bindings target the same slot the loser is not silently dropped: a
//! [`Collision`] is recorded in the load report.

use serde::Deserialize;

use super::id::TaxonomyId;
use super::key::CharsetKey;

/// Policy for taxonomy spellings that collapse onto one key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
	/// Keep the first spelling seen for a key.
	FirstWins,
	/// Overwrite with the last spelling seen.
	#[default]
	LastWins,
}

impl DuplicatePolicy {
	/// Returns true if `incoming` should replace the existing binding.
	#[inline]
	pub fn replaces(self) -> bool {
		matches!(self, Self::LastWins)
	}
}

/// Where a short-name binding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
	/// Canonical name of a dataset record.
	Canonical,
	/// Alias listed in a dataset record.
	DatasetAlias,
	/// Member of a hand-authored equivalence group.
	Group,
	/// Spelling variant contributed by a taxonomy.
	Variant(TaxonomyId),
}

impl std::fmt::Display for KeyKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Canonical => write!(f, "canonical"),
			Self::DatasetAlias => write!(f, "dataset_alias"),
			Self::Group => write!(f, "group"),
			Self::Variant(id) => write!(f, "variant:{id}"),
		}
	}
}

/// One side of a short-name conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Party {
	pub key: CharsetKey,
	pub kind: KeyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// Existing binding kept; incoming dropped.
	KeptExisting,
	/// Existing binding replaced by incoming.
	ReplacedExisting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collision {
	/// A normalized short name was already bound to a different key.
	///
	/// Bulk loading is first-wins for short names, so `resolution` is always
	/// [`Resolution::KeptExisting`] for collisions recorded at build time.
	ShortName {
		name: Box<str>,
		existing: Party,
		incoming: Party,
		resolution: Resolution,
	},
	/// Two taxonomy records resolved to the same key.
	Spelling {
		taxonomy: TaxonomyId,
		key: CharsetKey,
		existing: Box<str>,
		incoming: Box<str>,
		policy: DuplicatePolicy,
		resolution: Resolution,
	},
}

impl std::fmt::Display for Collision {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::ShortName {
				name,
				existing,
				incoming,
				resolution,
			} => write!(
				f,
				"short name {name:?}: {} key={} vs {} key={} ({resolution:?})",
				existing.kind, existing.key, incoming.kind, incoming.key
			),
			Self::Spelling {
				taxonomy,
				key,
				existing,
				incoming,
				policy,
				resolution,
			} => write!(
				f,
				"{taxonomy} spelling for key={key}: {existing:?} vs {incoming:?} under {policy:?} ({resolution:?})"
			),
		}
	}
}
