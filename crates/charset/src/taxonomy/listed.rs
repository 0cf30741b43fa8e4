//! In-memory taxonomy over a caller-supplied enumeration.

use super::{SpellingOverride, TaxonomyId, TaxonomyRecord, TaxonomySource};
use crate::core::ProbeError;

/// A taxonomy whose enumeration is already known.
///
/// Useful for naming conventions with no installed library to ask (a vendor
/// API's accepted labels, a database's collation charsets) and for tests.
#[derive(Debug, Clone)]
pub struct ListedTaxonomy {
	id: TaxonomyId,
	records: Vec<TaxonomyRecord>,
	overrides: Vec<SpellingOverride>,
}

impl ListedTaxonomy {
	pub fn new(id: TaxonomyId) -> Self {
		Self {
			id,
			records: Vec::new(),
			overrides: Vec::new(),
		}
	}

	/// Adds a record with no alternative spellings.
	pub fn name(mut self, spelling: impl Into<String>) -> Self {
		self.records.push(TaxonomyRecord::single(spelling));
		self
	}

	/// Adds a full record.
	pub fn record(mut self, record: TaxonomyRecord) -> Self {
		self.records.push(record);
		self
	}

	/// Adds a post-ingestion override.
	pub fn override_spelling(mut self, spelling: impl Into<String>, target: impl Into<String>) -> Self {
		self.overrides.push(SpellingOverride {
			spelling: spelling.into().into(),
			target: target.into().into(),
		});
		self
	}
}

impl TaxonomySource for ListedTaxonomy {
	fn id(&self) -> TaxonomyId {
		self.id
	}

	fn probe(&self) -> Result<Vec<TaxonomyRecord>, ProbeError> {
		if self.records.is_empty() {
			return Err(ProbeError::Empty);
		}
		Ok(self.records.clone())
	}

	fn overrides(&self) -> &[SpellingOverride] {
		&self.overrides
	}
}
