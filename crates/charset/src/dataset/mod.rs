//! Authoritative registry dataset.
//!
//! The registry snapshot ships as a TOML document of `[[charset]]` records and
//! is embedded at compile time. Parsing validates each record independently:
//! a record with no name, no key, an out-of-range key or a key another record
//! already owns is skipped and reported, never fatal.

mod groups;

use rustc_hash::FxHashMap;
use serde::Deserialize;

pub use self::groups::{EQUIVALENCE_GROUPS, EquivalenceGroup};
use crate::core::{CharsetKey, DatasetError, RecordIssue, SYNTHETIC_BASE, normalize};

const EMBEDDED: &str = include_str!("../../data/character-sets.toml");

#[derive(Debug, Deserialize)]
struct RawDataset {
	#[serde(default, rename = "charset")]
	records: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
	name: Option<String>,
	mib: Option<i64>,
	#[serde(default)]
	aliases: Vec<String>,
	preferred: Option<String>,
}

/// A validated dataset record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRecord {
	pub key: CharsetKey,
	pub name: String,
	pub aliases: Vec<String>,
	pub preferred: Option<String>,
}

/// Parsed authoritative dataset plus the records that were rejected.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
	records: Vec<DatasetRecord>,
	issues: Vec<RecordIssue>,
}

impl Dataset {
	/// Parses a dataset document.
	///
	/// Returns an error only if the document itself is not valid TOML of the
	/// expected shape.
	pub fn parse(input: &str) -> Result<Self, DatasetError> {
		let raw: RawDataset = toml::from_str(input)?;
		let mut dataset = Self::default();
		let mut owners: FxHashMap<CharsetKey, usize> = FxHashMap::default();

		for (index, record) in raw.records.into_iter().enumerate() {
			match validate(index, record, &owners, &dataset.records) {
				Ok(record) => {
					owners.insert(record.key, dataset.records.len());
					dataset.records.push(record);
				}
				Err(issue) => {
					tracing::warn!(%issue, "skipping dataset record");
					dataset.issues.push(issue);
				}
			}
		}

		tracing::debug!(
			records = dataset.records.len(),
			skipped = dataset.issues.len(),
			"parsed charset dataset"
		);
		Ok(dataset)
	}

	/// Parses the embedded registry snapshot.
	pub fn embedded() -> Result<Self, DatasetError> {
		Self::parse(EMBEDDED)
	}

	pub fn records(&self) -> &[DatasetRecord] {
		&self.records
	}

	/// Records skipped during parsing.
	pub fn issues(&self) -> &[RecordIssue] {
		&self.issues
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub(crate) fn into_parts(self) -> (Vec<DatasetRecord>, Vec<RecordIssue>) {
		(self.records, self.issues)
	}
}

fn validate(
	index: usize,
	raw: RawRecord,
	owners: &FxHashMap<CharsetKey, usize>,
	accepted: &[DatasetRecord],
) -> Result<DatasetRecord, RecordIssue> {
	let name = match raw.name {
		Some(name) if !name.trim().is_empty() => name.trim().to_string(),
		_ => return Err(RecordIssue::MissingName { index }),
	};
	let Some(mib) = raw.mib else {
		return Err(RecordIssue::MissingKey { index, name });
	};
	let key = match u32::try_from(mib) {
		Ok(raw_key) if raw_key < SYNTHETIC_BASE => CharsetKey::new(raw_key),
		_ => {
			return Err(RecordIssue::KeyOutOfRange {
				index,
				name,
				key: mib.clamp(0, i64::from(u32::MAX)) as u32,
			});
		}
	};
	if let Some(&owner) = owners.get(&key) {
		return Err(RecordIssue::DuplicateKey {
			index,
			name,
			key: key.get(),
			owner: accepted[owner].name.clone(),
		});
	}
	if normalize(&name).is_empty() {
		return Err(RecordIssue::EmptyShortName { index, name });
	}

	Ok(DatasetRecord {
		key,
		name,
		aliases: raw.aliases,
		preferred: raw.preferred.filter(|p| !p.trim().is_empty()),
	})
}

#[cfg(test)]
mod tests;
