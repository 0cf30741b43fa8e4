//! glibc locale charmap names, read from the charmap directory.

use std::path::PathBuf;

use super::{TaxonomyId, TaxonomyRecord, TaxonomySource};
use crate::core::ProbeError;

/// Default location of glibc's charmap sources.
pub const DEFAULT_CHARMAP_DIR: &str = "/usr/share/i18n/charmaps";

/// The charmap taxonomy: one record per file, named by its stem.
#[derive(Debug, Clone)]
pub struct CharmapTaxonomy {
	dir: PathBuf,
}

impl CharmapTaxonomy {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}
}

impl Default for CharmapTaxonomy {
	fn default() -> Self {
		Self::new(DEFAULT_CHARMAP_DIR)
	}
}

impl TaxonomySource for CharmapTaxonomy {
	fn id(&self) -> TaxonomyId {
		TaxonomyId::CHARMAP
	}

	fn probe(&self) -> Result<Vec<TaxonomyRecord>, ProbeError> {
		if !self.dir.is_dir() {
			return Err(ProbeError::MissingDirectory(self.dir.clone()));
		}

		let mut names = Vec::new();
		for entry in std::fs::read_dir(&self.dir)? {
			let entry = entry?;
			if !entry.file_type()?.is_file() {
				continue;
			}
			let file_name = entry.file_name();
			let Some(file_name) = file_name.to_str() else {
				continue;
			};
			let stem = file_name.strip_suffix(".gz").unwrap_or(file_name);
			if !stem.is_empty() && !stem.starts_with('.') {
				names.push(stem.to_string());
			}
		}
		if names.is_empty() {
			return Err(ProbeError::Empty);
		}

		// Directory order is filesystem-dependent; keep ingestion deterministic.
		names.sort_unstable();
		Ok(names.into_iter().map(TaxonomyRecord::single).collect())
	}
}
