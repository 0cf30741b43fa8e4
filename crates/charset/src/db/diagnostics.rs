//! Load diagnostics.
//!
//! Building a registry never fails on bad data. Everything that was skipped,
//! dropped or overridden along the way lands in a [`LoadReport`].

use crate::config::AliasConfig;
use crate::core::{Collision, RecordIssue, TaxonomyId};

/// Non-fatal issues collected while building a [`CharsetDb`](super::CharsetDb).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
	/// Dataset records rejected by validation.
	pub skipped_records: Vec<RecordIssue>,
	/// Equivalence group heads that did not resolve.
	pub unresolved_groups: Vec<String>,
	/// Override targets that did not resolve, per taxonomy.
	pub unresolved_overrides: Vec<(TaxonomyId, String)>,
	pub collisions: Vec<Collision>,
	/// Configured aliases that could not be registered.
	pub failed_aliases: Vec<AliasConfig>,
}

impl LoadReport {
	/// Returns true if nothing was reported.
	pub fn is_clean(&self) -> bool {
		self.skipped_records.is_empty()
			&& self.unresolved_groups.is_empty()
			&& self.unresolved_overrides.is_empty()
			&& self.collisions.is_empty()
			&& self.failed_aliases.is_empty()
	}

	pub fn short_name_collisions(&self) -> impl Iterator<Item = &Collision> + '_ {
		self.collisions
			.iter()
			.filter(|c| matches!(c, Collision::ShortName { .. }))
	}

	/// Spelling collisions recorded for taxonomy `id`.
	pub fn spelling_collisions(&self, id: TaxonomyId) -> impl Iterator<Item = &Collision> + '_ {
		self.collisions
			.iter()
			.filter(move |c| matches!(c, Collision::Spelling { taxonomy, .. } if *taxonomy == id))
	}
}
