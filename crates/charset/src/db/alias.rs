//! Runtime alias registration.

use std::sync::Arc;

use super::CharsetDb;
use crate::core::{ShortNameIndex, TaxonomyId, normalize};

impl CharsetDb {
	/// Binds `alias` to the encoding `target` names in taxonomy `id`.
	///
	/// `target` is resolved through the current bindings, overlay included, so
	/// aliases compose: an alias may target another alias. Returns the
	/// taxonomy's spelling for the target (the canonical name for the
	/// authoritative taxonomy), or `None` without mutating anything if the
	/// target does not resolve or `alias` has no short name.
	///
	/// An alias can rebind a short name the base index already owns. Nothing
	/// is ever unbound.
	pub fn add_alias(&self, id: TaxonomyId, alias: &str, target: &str) -> Option<&str> {
		let short = normalize(alias);
		if short.is_empty() {
			tracing::warn!(taxonomy = %id, alias, "alias has no short name");
			return None;
		}

		let key = self.key_for_name(target);
		let name = key.and_then(|key| {
			if id.is_authoritative() {
				self.name_for_key(key)
			} else {
				self.spellings.get(&id)?.get(&key).map(AsRef::as_ref)
			}
		});
		let (Some(key), Some(name)) = (key, name) else {
			tracing::warn!(taxonomy = %id, alias, target, "alias target does not resolve");
			return None;
		};

		loop {
			let cur = self.overlay.load_full();
			if cur.get(&short) == Some(key) {
				break;
			}
			let mut next = ShortNameIndex::clone(&cur);
			next.insert(&short, key);
			let next = Arc::new(next);

			let prev = self.overlay.compare_and_swap(&cur, next);
			if Arc::ptr_eq(&prev, &cur) {
				break;
			}
		}

		tracing::debug!(taxonomy = %id, alias = %short, %key, "alias registered");
		Some(name)
	}
}

#[cfg(test)]
mod tests {
	use crate::core::TaxonomyId;
	use crate::db::CharsetDb;
	use crate::dataset::Dataset;
	use crate::taxonomy::ListedTaxonomy;

	const WEB: TaxonomyId = TaxonomyId::new("web");

	fn db() -> CharsetDb {
		let dataset = Dataset::parse(
			r#"
[[charset]]
name = "Shift_JIS"
mib = 17
aliases = ["MS_Kanji", "csShiftJIS"]
preferred = "Shift_JIS"

[[charset]]
name = "ISO-8859-1"
mib = 4
aliases = ["latin1", "l1"]
"#,
		)
		.unwrap();
		CharsetDb::builder(dataset)
			.without_builtin_groups()
			.taxonomy(ListedTaxonomy::new(WEB).name("shift_jis").name("iso-8859-1"))
			.build()
	}

	/// Aliases resolve to the target's canonical name.
	#[test]
	fn test_add_alias_resolves() {
		let db = db();
		assert_eq!(db.add_alias(TaxonomyId::IANA, "japanese", "ms_kanji"), Some("Shift_JIS"));
		assert_eq!(db.canonical_name("Japanese"), Some("Shift_JIS"));
	}

	/// An alias may target another alias.
	#[test]
	fn test_add_alias_chains() {
		let db = db();
		assert_eq!(db.add_alias(TaxonomyId::IANA, "a", "Shift_JIS"), Some("Shift_JIS"));
		assert_eq!(db.add_alias(TaxonomyId::IANA, "b", "a"), Some("Shift_JIS"));
		assert_eq!(db.canonical_name("b"), Some("Shift_JIS"));
	}

	/// Unresolved targets leave the registry untouched.
	#[test]
	fn test_add_alias_unresolved() {
		let db = db();
		assert_eq!(db.add_alias(TaxonomyId::IANA, "x", "not-a-real-charset"), None);
		assert_eq!(db.canonical_name("x"), None);
		assert_eq!(db.add_alias(TaxonomyId::IANA, "---", "latin1"), None);
	}

	/// Non-authoritative taxonomies return their own spelling.
	#[test]
	fn test_add_alias_taxonomy_spelling() {
		let db = db();
		assert_eq!(db.add_alias(WEB, "sj", "csShiftJIS"), Some("shift_jis"));
		assert_eq!(db.taxonomy_name(WEB, "sj"), Some("shift_jis"));
		assert_eq!(db.add_alias(TaxonomyId::WHATWG, "w", "latin1"), None);
	}

	/// Overlay bindings shadow base bindings.
	#[test]
	fn test_add_alias_rebinds_base_name() {
		let db = db();
		assert_eq!(db.canonical_name("l1"), Some("ISO-8859-1"));
		assert_eq!(db.add_alias(TaxonomyId::IANA, "l1", "Shift_JIS"), Some("Shift_JIS"));
		assert_eq!(db.canonical_name("l1"), Some("Shift_JIS"));
		assert!(!db.aliases_for("latin1").contains(&"l1".to_string()));
		assert!(db.aliases_for("sjis-alias-free").is_empty());
	}

	/// The returned name always describes the key the alias was bound to.
	#[test]
	fn test_add_alias_name_matches_bound_key() {
		let db = db();
		assert_eq!(db.add_alias(TaxonomyId::IANA, "latin1", "Shift_JIS"), Some("Shift_JIS"));
		let name = db.add_alias(TaxonomyId::IANA, "c", "latin1");
		assert_eq!(name, Some("Shift_JIS"));
		assert_eq!(db.canonical_name("c"), name);
		assert_eq!(db.key_for_name("c"), db.key_for_name("MS_Kanji"));

		let name = db.add_alias(WEB, "d", "latin1");
		assert_eq!(name, Some("shift_jis"));
		assert_eq!(db.taxonomy_name(WEB, "d"), name);
	}

	/// Concurrent registration loses no aliases.
	#[test]
	fn test_add_alias_concurrent() {
		let db = db();
		std::thread::scope(|s| {
			for t in 0..4 {
				let db = &db;
				s.spawn(move || {
					for i in 0..25 {
						let alias = format!("alias{t}n{i}");
						assert!(db.add_alias(TaxonomyId::IANA, &alias, "latin1").is_some());
					}
				});
			}
		});
		for t in 0..4 {
			for i in 0..25 {
				assert_eq!(db.canonical_name(&format!("alias{t}n{i}")), Some("ISO-8859-1"));
			}
		}
	}
}
