//! Encoding-name resolution across naming taxonomies.
//!
//! Every encoding is identified by a numeric [`CharsetKey`]. The authoritative
//! registry dataset assigns keys below [`SYNTHETIC_BASE`]; taxonomies layered on
//! top (WHATWG labels, host iconv names, glibc charmap files) map their
//! spellings onto those keys, or onto synthetic keys minted for encodings the
//! registry never named.
//!
//! Names are compared by their short form: ASCII alphanumerics, lowercased.
//! `"Windows_1252"`, `"windows-1252"` and `"WINDOWS 1252"` are the same name.
//!
//! The free functions below query a process-wide [`CharsetDb`] built on first
//! use. Call [`init`] before the first query to configure it, or build a
//! private registry with [`CharsetDbBuilder`].
//!
//! ```
//! use xeno_charset::{CharsetKey, canonical_name, name_for_key};
//!
//! assert_eq!(canonical_name("x-sjis"), Some("Shift_JIS"));
//! assert_eq!(name_for_key(CharsetKey::new(1015)), Some("UTF-16"));
//! ```

pub mod config;
pub mod core;
pub mod dataset;
pub mod db;
pub mod taxonomy;

pub use crate::config::{CharsetConfig, ConfigLoadReport, load_config};
pub use crate::core::{CanonicalEntry, CharsetKey, Collision, DuplicatePolicy, SYNTHETIC_BASE, TaxonomyId, normalize};
pub use crate::dataset::{Dataset, DatasetRecord, EQUIVALENCE_GROUPS, EquivalenceGroup};
pub use crate::db::{CharsetDb, CharsetDbBuilder, LoadReport, get_db, init};
pub use crate::taxonomy::{ListedTaxonomy, TaxonomyRecord, TaxonomySource, TaxonomyStatus};

/// Canonical registry name for `input`.
pub fn canonical_name(input: &str) -> Option<&'static str> {
	get_db().canonical_name(input)
}

/// Preferred MIME name for `input`.
pub fn preferred_mime_name(input: &str) -> Option<&'static str> {
	get_db().preferred_mime_name(input)
}

pub fn taxonomy_name(id: TaxonomyId, input: &str) -> Option<&'static str> {
	get_db().taxonomy_name(id, input)
}

/// Label `encoding_rs` uses for `input`.
pub fn whatwg_name(input: &str) -> Option<&'static str> {
	get_db().whatwg_name(input)
}

/// Name the host `iconv` accepts for `input`.
pub fn iconv_name(input: &str) -> Option<&'static str> {
	get_db().iconv_name(input)
}

/// Charmap file name for `input`.
pub fn charmap_name(input: &str) -> Option<&'static str> {
	get_db().charmap_name(input)
}

pub fn key_for_name(input: &str) -> Option<CharsetKey> {
	get_db().key_for_name(input)
}

pub fn name_for_key(key: CharsetKey) -> Option<&'static str> {
	get_db().name_for_key(key)
}

pub fn all_canonical_names() -> Vec<&'static str> {
	get_db().all_canonical_names()
}

/// Registers `alias` for `target` in the global registry.
///
/// See [`CharsetDb::add_alias`].
pub fn add_alias(id: TaxonomyId, alias: &str, target: &str) -> Option<&'static str> {
	get_db().add_alias(id, alias, target)
}
