//! Registry configuration.
//!
//! Configuration is a small TOML document. Every field is optional; an empty
//! document yields the defaults (all taxonomies on, last-wins spellings, no
//! extra groups or aliases).
//!
//! ```toml
//! spelling_policy = "first-wins"
//! iconv_program = "/usr/bin/iconv"
//!
//! [taxonomies]
//! charmap = false
//!
//! [[group]]
//! head = "UTF-8"
//! aliases = ["utf8-bom"]
//!
//! [[alias]]
//! taxonomy = "whatwg"
//! alias = "latin"
//! target = "windows-1252"
//! ```

use std::path::PathBuf;

use serde::Deserialize;

pub use crate::core::ConfigError;
use crate::core::{DuplicatePolicy, TaxonomyId};

pub mod load;

pub use load::{CONFIG_ENV, ConfigLoadReport, load_config};

/// Taxonomy labels a config file may name.
const KNOWN_TAXONOMIES: [TaxonomyId; 4] = [TaxonomyId::IANA, TaxonomyId::WHATWG, TaxonomyId::ICONV, TaxonomyId::CHARMAP];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CharsetConfig {
	pub taxonomies: TaxonomyToggles,
	/// Name or path of the iconv binary.
	pub iconv_program: Option<PathBuf>,
	/// Directory holding charmap files.
	pub charmap_dir: Option<PathBuf>,
	pub spelling_policy: DuplicatePolicy,
	/// Equivalence groups appended after the built-in list.
	#[serde(rename = "group")]
	pub groups: Vec<GroupConfig>,
	/// Aliases registered once the registry is built.
	#[serde(rename = "alias")]
	pub aliases: Vec<AliasConfig>,
}

/// Per-taxonomy enable flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaxonomyToggles {
	pub whatwg: bool,
	pub iconv: bool,
	pub charmap: bool,
}

impl Default for TaxonomyToggles {
	fn default() -> Self {
		Self {
			whatwg: true,
			iconv: true,
			charmap: true,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
	pub head: String,
	#[serde(default)]
	pub aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasConfig {
	/// Taxonomy the target is resolved through. Defaults to `iana`.
	#[serde(default = "default_alias_taxonomy")]
	pub taxonomy: String,
	pub alias: String,
	pub target: String,
}

fn default_alias_taxonomy() -> String {
	TaxonomyId::IANA.as_str().to_string()
}

impl CharsetConfig {
	/// Parses a config document.
	pub fn parse_str(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		for alias in &config.aliases {
			if !KNOWN_TAXONOMIES
				.iter()
				.any(|id| id.as_str().eq_ignore_ascii_case(&alias.taxonomy))
			{
				return Err(ConfigError::UnknownTaxonomy(alias.taxonomy.clone()));
			}
		}
		Ok(config)
	}
}
