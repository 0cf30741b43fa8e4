//! Registry construction.
//!
//! Build order is fixed and every later stage may depend on the bindings of
//! the earlier ones:
//!
//! 1. Dataset canonical names, then dataset aliases.
//! 2. Equivalence groups (built-in list, then configured groups).
//! 3. Taxonomies, in registration order. A later taxonomy can resolve its
//!    spellings through variants an earlier one bound.
//! 4. Configured aliases, through the ordinary [`CharsetDb::add_alias`] path.

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap;

use super::diagnostics::LoadReport;
use super::resolve::resolve_with;
use super::{CharsetDb, SpellingTable};
use crate::config::{AliasConfig, CharsetConfig};
use crate::core::index::InsertAction;
use crate::core::{
	CanonicalEntry, CharsetKey, Collision, DatasetError, DuplicatePolicy, KeyKind, Party, Resolution, ShortNameIndex,
	SyntheticKeyAllocator, TaxonomyId, normalize,
};
use crate::dataset::{Dataset, EQUIVALENCE_GROUPS};
use crate::taxonomy::{TaxonomySource, TaxonomyStatus, ingest};

/// An equivalence group with owned names.
#[derive(Debug, Clone)]
struct OwnedGroup {
	head: String,
	aliases: Vec<String>,
}

enum TaxonomySlot {
	Source(Box<dyn TaxonomySource>),
	Disabled(TaxonomyId),
}

/// Mutable tables used while the registry is being assembled.
pub(crate) struct BuildState {
	entries: FxHashMap<CharsetKey, CanonicalEntry>,
	names: ShortNameIndex,
	kinds: FxHashMap<Box<str>, KeyKind>,
	spellings: FxHashMap<TaxonomyId, SpellingTable>,
	pub(crate) alloc: SyntheticKeyAllocator,
	pub(crate) report: LoadReport,
}

impl BuildState {
	fn new() -> Self {
		Self {
			entries: FxHashMap::default(),
			names: ShortNameIndex::new(),
			kinds: FxHashMap::default(),
			spellings: FxHashMap::default(),
			alloc: SyntheticKeyAllocator::new(),
			report: LoadReport::default(),
		}
	}

	/// Resolves `input` against the bindings made so far.
	pub(crate) fn resolve(&self, input: &str) -> Option<CharsetKey> {
		resolve_with(input, |short| self.names.get(short))
	}

	/// Binds the short name of `name` to `key` unless another key owns it.
	///
	/// Returns false if the name normalizes to nothing or lost a collision.
	pub(crate) fn bind(&mut self, name: &str, key: CharsetKey, kind: KeyKind) -> bool {
		let short = normalize(name);
		if short.is_empty() {
			return false;
		}
		match self.names.insert_first(&short, key) {
			InsertAction::InsertedNew => {
				self.kinds.insert(Box::from(short.as_str()), kind);
				true
			}
			InsertAction::Unchanged => true,
			InsertAction::KeptExisting(existing) | InsertAction::ReplacedExisting(existing) => {
				let existing_kind = self.kinds.get(short.as_str()).copied().unwrap_or(KeyKind::Canonical);
				self.report.collisions.push(Collision::ShortName {
					name: short.into_boxed_str(),
					existing: Party {
						key: existing,
						kind: existing_kind,
					},
					incoming: Party { key, kind },
					resolution: Resolution::KeptExisting,
				});
				false
			}
		}
	}

	/// Records `spelling` as taxonomy `id`'s name for `key`.
	pub(crate) fn record_spelling(&mut self, id: TaxonomyId, key: CharsetKey, spelling: &str, policy: DuplicatePolicy) {
		let table = self.spellings.entry(id).or_default();
		match table.get(&key) {
			Some(existing) if existing.as_ref() == spelling => {}
			Some(existing) => {
				let resolution = if policy.replaces() {
					Resolution::ReplacedExisting
				} else {
					Resolution::KeptExisting
				};
				self.report.collisions.push(Collision::Spelling {
					taxonomy: id,
					key,
					existing: existing.clone(),
					incoming: Box::from(spelling),
					policy,
					resolution,
				});
				if policy.replaces() {
					table.insert(key, Box::from(spelling));
				}
			}
			None => {
				table.insert(key, Box::from(spelling));
			}
		}
	}

	fn load_dataset(&mut self, dataset: Dataset) {
		let (records, issues) = dataset.into_parts();
		self.report.skipped_records = issues;

		for record in &records {
			self.entries.insert(
				record.key,
				CanonicalEntry {
					key: record.key,
					name: Box::from(record.name.as_str()),
					preferred: record.preferred.as_deref().map(Box::from),
				},
			);
			self.bind(&record.name, record.key, KeyKind::Canonical);
			self.record_spelling(TaxonomyId::IANA, record.key, &record.name, DuplicatePolicy::FirstWins);
		}
		for record in &records {
			for alias in record.aliases.iter().chain(&record.preferred) {
				self.bind(alias, record.key, KeyKind::DatasetAlias);
			}
		}
	}

	fn apply_group(&mut self, group: &OwnedGroup) {
		let Some(key) = self.resolve(&group.head) else {
			tracing::warn!(head = %group.head, "equivalence group head does not resolve; skipping group");
			self.report.unresolved_groups.push(group.head.clone());
			return;
		};
		for alias in &group.aliases {
			self.bind(alias, key, KeyKind::Group);
		}
	}
}

/// Builder for [`CharsetDb`].
pub struct CharsetDbBuilder {
	dataset: Dataset,
	groups: Vec<OwnedGroup>,
	taxonomies: Vec<TaxonomySlot>,
	aliases: Vec<AliasConfig>,
	policy: DuplicatePolicy,
}

impl CharsetDbBuilder {
	/// Creates a builder over `dataset` with the built-in equivalence groups
	/// and no taxonomies.
	pub fn new(dataset: Dataset) -> Self {
		Self {
			dataset,
			groups: EQUIVALENCE_GROUPS
				.iter()
				.map(|g| OwnedGroup {
					head: g.head.to_string(),
					aliases: g.aliases.iter().map(|a| a.to_string()).collect(),
				})
				.collect(),
			taxonomies: Vec::new(),
			aliases: Vec::new(),
			policy: DuplicatePolicy::default(),
		}
	}

	/// Creates a builder over the embedded dataset, configured from `config`.
	pub fn from_config(config: &CharsetConfig) -> Result<Self, DatasetError> {
		let mut builder = Self::new(Dataset::embedded()?).spelling_policy(config.spelling_policy);

		builder = if config.taxonomies.whatwg {
			builder.with_whatwg()
		} else {
			builder.disabled(TaxonomyId::WHATWG)
		};
		builder = if config.taxonomies.iconv {
			builder.with_iconv(config)
		} else {
			builder.disabled(TaxonomyId::ICONV)
		};
		builder = if config.taxonomies.charmap {
			builder.with_charmap(config)
		} else {
			builder.disabled(TaxonomyId::CHARMAP)
		};

		for group in &config.groups {
			builder = builder.group(&group.head, &group.aliases);
		}
		builder.aliases.extend(config.aliases.iter().cloned());
		Ok(builder)
	}

	#[cfg(feature = "whatwg")]
	fn with_whatwg(self) -> Self {
		self.taxonomy(crate::taxonomy::WhatwgTaxonomy)
	}

	#[cfg(not(feature = "whatwg"))]
	fn with_whatwg(self) -> Self {
		self.disabled(TaxonomyId::WHATWG)
	}

	#[cfg(feature = "iconv")]
	fn with_iconv(self, config: &CharsetConfig) -> Self {
		let source = match &config.iconv_program {
			Some(program) => crate::taxonomy::IconvTaxonomy::new(program.clone()),
			None => crate::taxonomy::IconvTaxonomy::default(),
		};
		self.taxonomy(source)
	}

	#[cfg(not(feature = "iconv"))]
	fn with_iconv(self, _config: &CharsetConfig) -> Self {
		self.disabled(TaxonomyId::ICONV)
	}

	#[cfg(feature = "charmap")]
	fn with_charmap(self, config: &CharsetConfig) -> Self {
		let source = match &config.charmap_dir {
			Some(dir) => crate::taxonomy::CharmapTaxonomy::new(dir.clone()),
			None => crate::taxonomy::CharmapTaxonomy::default(),
		};
		self.taxonomy(source)
	}

	#[cfg(not(feature = "charmap"))]
	fn with_charmap(self, _config: &CharsetConfig) -> Self {
		self.disabled(TaxonomyId::CHARMAP)
	}

	/// Drops the built-in equivalence groups.
	pub fn without_builtin_groups(mut self) -> Self {
		self.groups.clear();
		self
	}

	/// Appends an equivalence group.
	pub fn group<I, S>(mut self, head: impl Into<String>, aliases: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.groups.push(OwnedGroup {
			head: head.into(),
			aliases: aliases.into_iter().map(|a| a.as_ref().to_string()).collect(),
		});
		self
	}

	/// Installs a taxonomy. Taxonomies are ingested in installation order.
	pub fn taxonomy(mut self, source: impl TaxonomySource + 'static) -> Self {
		self.taxonomies.push(TaxonomySlot::Source(Box::new(source)));
		self
	}

	/// Records a taxonomy as deliberately not installed.
	pub fn disabled(mut self, id: TaxonomyId) -> Self {
		self.taxonomies.push(TaxonomySlot::Disabled(id));
		self
	}

	/// Registers an alias once the registry is built.
	pub fn alias(mut self, taxonomy: TaxonomyId, alias: impl Into<String>, target: impl Into<String>) -> Self {
		self.aliases.push(AliasConfig {
			taxonomy: taxonomy.as_str().to_string(),
			alias: alias.into(),
			target: target.into(),
		});
		self
	}

	/// Sets the policy for taxonomy spellings that collapse onto one key.
	pub fn spelling_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Builds the registry, probing every installed taxonomy.
	pub fn build(self) -> CharsetDb {
		let mut state = BuildState::new();
		state.load_dataset(self.dataset);
		for group in &self.groups {
			state.apply_group(group);
		}

		let mut taxonomies = vec![(
			TaxonomyId::IANA,
			TaxonomyStatus::Installed {
				records: state.entries.len(),
				synthetic: 0,
			},
		)];
		for slot in &self.taxonomies {
			let entry = match slot {
				TaxonomySlot::Source(source) => (source.id(), ingest::ingest(&mut state, source.as_ref(), self.policy)),
				TaxonomySlot::Disabled(id) => (*id, TaxonomyStatus::Disabled),
			};
			taxonomies.retain(|(id, _)| *id != entry.0);
			taxonomies.push(entry);
		}

		if !state.report.collisions.is_empty() {
			let short_names = state.report.short_name_collisions().count();
			tracing::debug!(
				short_names,
				spellings = state.report.collisions.len() - short_names,
				"charset registry collisions detected"
			);
		}

		let mut db = CharsetDb {
			entries: state.entries,
			base: state.names,
			overlay: ArcSwap::from_pointee(ShortNameIndex::new()),
			spellings: state.spellings,
			taxonomies,
			report: state.report,
		};

		for alias in &self.aliases {
			let applied = db
				.taxonomy_id(&alias.taxonomy)
				.and_then(|id| db.add_alias(id, &alias.alias, &alias.target).map(|_| ()));
			if applied.is_none() {
				tracing::warn!(taxonomy = %alias.taxonomy, alias = %alias.alias, target = %alias.target, "configured alias not applied");
				db.report.failed_aliases.push(alias.clone());
			}
		}
		db
	}
}

impl Default for CharsetDbBuilder {
	fn default() -> Self {
		Self::new(Dataset::default())
	}
}
