//! Naming taxonomies layered on the authoritative key space.
//!
//! A taxonomy is any external naming convention: the labels a conversion
//! library accepts, the names an installed tool lists, the files a system
//! ships. Each one is described by a [`TaxonomySource`] whose only job is to
//! enumerate its spellings once. Ingestion (see [`ingest`]) maps every
//! spelling onto a key, minting synthetic keys for spellings the
//! authoritative registry never named.
//!
//! Probing happens exactly once, when the registry is built. A probe that
//! fails leaves the taxonomy [`TaxonomyStatus::Absent`] and every query against
//! it returns `None` for the registry's lifetime.

use std::borrow::Cow;

#[cfg(feature = "charmap")]
pub mod charmap;
#[cfg(feature = "iconv")]
pub mod iconv;
pub(crate) mod ingest;
pub mod listed;
#[cfg(feature = "whatwg")]
pub mod whatwg;

#[cfg(feature = "charmap")]
pub use self::charmap::CharmapTaxonomy;
#[cfg(feature = "iconv")]
pub use self::iconv::IconvTaxonomy;
pub use self::listed::ListedTaxonomy;
#[cfg(feature = "whatwg")]
pub use self::whatwg::WhatwgTaxonomy;
pub use crate::core::TaxonomyId;
use crate::core::ProbeError;

/// One entry of a taxonomy's enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyRecord {
	/// Exact spelling the taxonomy uses for this encoding.
	pub spelling: String,
	/// Every spelling the taxonomy accepts for the same encoding, including
	/// `spelling` itself. Tried in order when resolving against the registry.
	pub variants: Vec<String>,
}

impl TaxonomyRecord {
	/// A record with no alternative spellings.
	pub fn single(spelling: impl Into<String>) -> Self {
		let spelling = spelling.into();
		Self {
			variants: vec![spelling.clone()],
			spelling,
		}
	}

	pub fn with_variants<I, S>(spelling: impl Into<String>, variants: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let spelling = spelling.into();
		let mut all = vec![spelling.clone()];
		all.extend(variants.into_iter().map(Into::into).filter(|v| *v != spelling));
		Self {
			spelling,
			variants: all,
		}
	}
}

/// Pins a taxonomy spelling onto the key `target` resolves to.
///
/// Applied after automatic ingestion, and only when the taxonomy actually
/// enumerated `spelling`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingOverride {
	pub spelling: Cow<'static, str>,
	pub target: Cow<'static, str>,
}

impl SpellingOverride {
	pub const fn new(spelling: &'static str, target: &'static str) -> Self {
		Self {
			spelling: Cow::Borrowed(spelling),
			target: Cow::Borrowed(target),
		}
	}
}

/// Enumerates one taxonomy.
pub trait TaxonomySource: Send + Sync {
	fn id(&self) -> TaxonomyId;

	/// Lists every spelling the taxonomy supports.
	///
	/// Called once per registry build. Implementations may read files or run
	/// subprocesses; failures mark the taxonomy absent.
	fn probe(&self) -> Result<Vec<TaxonomyRecord>, ProbeError>;

	/// Hand-coded corrections applied after ingestion.
	fn overrides(&self) -> &[SpellingOverride] {
		&[]
	}
}

/// Capability flag for an installed taxonomy, resolved once at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyStatus {
	/// Probe succeeded.
	Installed {
		/// Records enumerated by the probe.
		records: usize,
		/// Records that had no authoritative counterpart.
		synthetic: usize,
	},
	/// Probe failed; all lookups return `None`.
	Absent { reason: String },
	/// Turned off by configuration or by a missing crate feature.
	Disabled,
}

impl TaxonomyStatus {
	pub fn is_installed(&self) -> bool {
		matches!(self, Self::Installed { .. })
	}
}
