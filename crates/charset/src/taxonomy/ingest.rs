//! Ingestion of a taxonomy enumeration into the build state.

use super::{TaxonomySource, TaxonomyStatus};
use crate::core::{DuplicatePolicy, KeyKind};
use crate::db::builder::BuildState;

/// Probes `source` and folds its records into `state`.
///
/// Per record: resolve any variant to an existing key without side effects,
/// allocate a synthetic key when nothing resolves, record the spelling, then
/// bind every variant's short name to the key. Overrides run last.
pub(crate) fn ingest(state: &mut BuildState, source: &dyn TaxonomySource, policy: DuplicatePolicy) -> TaxonomyStatus {
	let id = source.id();
	let records = match source.probe() {
		Ok(records) => records,
		Err(error) => {
			tracing::debug!(taxonomy = %id, %error, "taxonomy absent");
			return TaxonomyStatus::Absent { reason: error.to_string() };
		}
	};

	let mut synthetic = 0usize;
	for record in &records {
		let resolved = std::iter::once(&record.spelling)
			.chain(&record.variants)
			.find_map(|candidate| state.resolve(candidate));
		let key = match resolved {
			Some(key) => key,
			None => {
				synthetic += 1;
				state.alloc.allocate()
			}
		};

		state.record_spelling(id, key, &record.spelling, policy);
		for variant in &record.variants {
			state.bind(variant, key, KeyKind::Variant(id));
		}
	}

	let mut seen = rustc_hash::FxHashSet::default();
	for record in &records {
		seen.insert(record.spelling.as_str());
	}
	for o in source.overrides() {
		if !seen.contains(o.spelling.as_ref()) {
			continue;
		}
		match state.resolve(&o.target) {
			Some(key) => state.record_spelling(id, key, &o.spelling, DuplicatePolicy::LastWins),
			None => {
				tracing::warn!(taxonomy = %id, spelling = %o.spelling, target = %o.target, "override target does not resolve");
				state.report.unresolved_overrides.push((id, o.target.to_string()));
			}
		}
	}

	tracing::debug!(taxonomy = %id, records = records.len(), synthetic, "taxonomy installed");
	TaxonomyStatus::Installed {
		records: records.len(),
		synthetic,
	}
}
