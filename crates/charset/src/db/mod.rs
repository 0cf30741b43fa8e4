//! Registry database and the global accessor.
//!
//! [`CharsetDb`] owns the immutable tables produced by [`CharsetDbBuilder`]
//! plus the runtime alias overlay. All lookups go through the same resolver:
//! overlay first, then the base index, with up to two `x-` prefixes stripped.

use std::sync::OnceLock;

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap;

pub mod alias;
pub mod builder;
pub mod diagnostics;
pub(crate) mod resolve;

pub use builder::CharsetDbBuilder;
pub use diagnostics::LoadReport;

use crate::config::{CharsetConfig, load};
use crate::core::{CanonicalEntry, CharsetKey, InitError, ShortNameIndex, TaxonomyId};
use crate::dataset::Dataset;
use crate::taxonomy::TaxonomyStatus;

/// Spellings of one taxonomy, by key.
pub type SpellingTable = FxHashMap<CharsetKey, Box<str>>;

/// Encoding-name registry.
pub struct CharsetDb {
	entries: FxHashMap<CharsetKey, CanonicalEntry>,
	base: ShortNameIndex,
	overlay: ArcSwap<ShortNameIndex>,
	spellings: FxHashMap<TaxonomyId, SpellingTable>,
	taxonomies: Vec<(TaxonomyId, TaxonomyStatus)>,
	report: LoadReport,
}

impl CharsetDb {
	pub fn builder(dataset: Dataset) -> CharsetDbBuilder {
		CharsetDbBuilder::new(dataset)
	}

	/// Resolves `input` to a key, authoritative or synthetic.
	pub fn key_for_name(&self, input: &str) -> Option<CharsetKey> {
		let overlay = self.overlay.load();
		resolve::resolve_with(input, |short| overlay.get(short).or_else(|| self.base.get(short)))
	}

	/// Canonical registry name for `input`.
	///
	/// Returns `None` when `input` resolves only to a synthetic key.
	pub fn canonical_name(&self, input: &str) -> Option<&str> {
		self.entry_for_name(input).map(|entry| entry.name.as_ref())
	}

	/// Preferred MIME name for `input`, falling back to the canonical name.
	pub fn preferred_mime_name(&self, input: &str) -> Option<&str> {
		self.entry_for_name(input).map(CanonicalEntry::mime_name)
	}

	/// Spelling taxonomy `id` uses for the encoding `input` names.
	///
	/// Always `None` for a taxonomy that is absent or disabled.
	pub fn taxonomy_name(&self, id: TaxonomyId, input: &str) -> Option<&str> {
		let table = self.spellings.get(&id)?;
		let key = self.key_for_name(input)?;
		table.get(&key).map(AsRef::as_ref)
	}

	pub fn whatwg_name(&self, input: &str) -> Option<&str> {
		self.taxonomy_name(TaxonomyId::WHATWG, input)
	}

	pub fn iconv_name(&self, input: &str) -> Option<&str> {
		self.taxonomy_name(TaxonomyId::ICONV, input)
	}

	pub fn charmap_name(&self, input: &str) -> Option<&str> {
		self.taxonomy_name(TaxonomyId::CHARMAP, input)
	}

	/// Canonical name of an authoritative key.
	pub fn name_for_key(&self, key: CharsetKey) -> Option<&str> {
		self.entry(key).map(|entry| entry.name.as_ref())
	}

	pub fn entry(&self, key: CharsetKey) -> Option<&CanonicalEntry> {
		self.entries.get(&key)
	}

	/// Every canonical name, ordered by key.
	pub fn all_canonical_names(&self) -> Vec<&str> {
		let mut entries: Vec<_> = self.entries.values().collect();
		entries.sort_unstable_by_key(|entry| entry.key);
		entries.into_iter().map(|entry| entry.name.as_ref()).collect()
	}

	/// Every short name bound to the key `input` resolves to, sorted.
	pub fn aliases_for(&self, input: &str) -> Vec<String> {
		let Some(key) = self.key_for_name(input) else {
			return Vec::new();
		};
		let overlay = self.overlay.load();
		let mut names: Vec<String> = self
			.base
			.names_for(key)
			.filter(|short| overlay.get(short).is_none_or(|k| k == key))
			.chain(overlay.names_for(key))
			.map(str::to_string)
			.collect();
		names.sort_unstable();
		names.dedup();
		names
	}

	/// Every spelling taxonomy `id` enumerated, sorted.
	pub fn taxonomy_names(&self, id: TaxonomyId) -> Vec<&str> {
		let mut names: Vec<&str> = self
			.spellings
			.get(&id)
			.map(|table| table.values().map(AsRef::as_ref).collect())
			.unwrap_or_default();
		names.sort_unstable();
		names
	}

	/// Capability flag of taxonomy `id`, if it was ever registered.
	pub fn taxonomy_status(&self, id: TaxonomyId) -> Option<&TaxonomyStatus> {
		self.taxonomies.iter().find(|(t, _)| *t == id).map(|(_, status)| status)
	}

	/// Every registered taxonomy with its status, in ingestion order.
	pub fn taxonomies(&self) -> &[(TaxonomyId, TaxonomyStatus)] {
		&self.taxonomies
	}

	/// Finds a registered taxonomy by label, ignoring ASCII case.
	pub fn taxonomy_id(&self, label: &str) -> Option<TaxonomyId> {
		self.taxonomies
			.iter()
			.map(|(id, _)| *id)
			.find(|id| id.as_str().eq_ignore_ascii_case(label))
	}

	pub fn report(&self) -> &LoadReport {
		&self.report
	}

	fn entry_for_name(&self, input: &str) -> Option<&CanonicalEntry> {
		self.entries.get(&self.key_for_name(input)?)
	}
}

static DB: OnceLock<CharsetDb> = OnceLock::new();

/// Returns the global registry, building it on first use.
///
/// Without a prior [`init`], configuration comes from the file named by
/// [`CONFIG_ENV`](crate::config::CONFIG_ENV) or the defaults.
pub fn get_db() -> &'static CharsetDb {
	DB.get_or_init(|| {
		let config = match load::load_from_env() {
			Some(report) => {
				for (path, error) in &report.errors {
					tracing::warn!(path = %path.display(), %error, "charset config failed to load");
				}
				report.into_config()
			}
			None => CharsetConfig::default(),
		};
		build_from_config(&config)
	})
}

/// Configures the global registry. Must run before the first lookup.
pub fn init(config: &CharsetConfig) -> Result<&'static CharsetDb, InitError> {
	if DB.get().is_some() {
		return Err(InitError::AlreadyInitialized);
	}
	DB.set(build_from_config(config))
		.map_err(|_| InitError::AlreadyInitialized)?;
	Ok(get_db())
}

fn build_from_config(config: &CharsetConfig) -> CharsetDb {
	match CharsetDbBuilder::from_config(config) {
		Ok(builder) => builder.build(),
		Err(e) => {
			tracing::error!("Embedded charset dataset failed to parse: {}", e);
			CharsetDbBuilder::default().build()
		}
	}
}
