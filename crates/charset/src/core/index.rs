//! Normalized short-name index.

use rustc_hash::FxHashMap;

use super::key::CharsetKey;
use super::normalize::normalize;

/// Result of a short-name insertion.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Name was new; binding inserted.
	InsertedNew,
	/// Name was already bound to the same key.
	Unchanged,
	/// Name was bound to another key; kept that binding.
	KeptExisting(CharsetKey),
	/// Name was bound to another key; replaced it.
	ReplacedExisting(CharsetKey),
}

/// Many-to-one map from normalized short names to keys.
///
/// Keys stored here are always in normalized form; [`ShortNameIndex::lookup`]
/// normalizes on the way in so callers can pass raw spellings.
#[derive(Debug, Clone, Default)]
pub struct ShortNameIndex {
	by_name: FxHashMap<Box<str>, CharsetKey>,
}

impl ShortNameIndex {
	pub fn new() -> Self {
		Self::default()
	}

	/// Looks up an already-normalized short name.
	#[inline]
	pub fn get(&self, short: &str) -> Option<CharsetKey> {
		self.by_name.get(short).copied()
	}

	/// Normalizes `name` and looks it up.
	#[inline]
	pub fn lookup(&self, name: &str) -> Option<CharsetKey> {
		self.get(&normalize(name))
	}

	/// Binds `short` to `key` unless it is already bound to another key.
	pub fn insert_first(&mut self, short: &str, key: CharsetKey) -> InsertAction {
		debug_assert!(super::normalize::is_normalized(short));
		match self.by_name.get(short) {
			Some(&existing) if existing == key => InsertAction::Unchanged,
			Some(&existing) => InsertAction::KeptExisting(existing),
			None => {
				self.by_name.insert(Box::from(short), key);
				InsertAction::InsertedNew
			}
		}
	}

	/// Binds `short` to `key`, replacing any existing binding.
	pub fn insert(&mut self, short: &str, key: CharsetKey) -> InsertAction {
		debug_assert!(super::normalize::is_normalized(short));
		match self.by_name.insert(Box::from(short), key) {
			None => InsertAction::InsertedNew,
			Some(prev) if prev == key => InsertAction::Unchanged,
			Some(prev) => InsertAction::ReplacedExisting(prev),
		}
	}

	/// Returns every short name bound to `key`, in no particular order.
	pub fn names_for(&self, key: CharsetKey) -> impl Iterator<Item = &str> + '_ {
		self.by_name
			.iter()
			.filter(move |&(_, &k)| k == key)
			.map(|(name, _)| name.as_ref())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, CharsetKey)> + '_ {
		self.by_name.iter().map(|(name, &key)| (name.as_ref(), key))
	}

	pub fn len(&self) -> usize {
		self.by_name.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_name.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// First-wins insertion reports the incumbent instead of overwriting it.
	#[test]
	fn test_insert_first_keeps_existing() {
		let mut index = ShortNameIndex::new();
		let a = CharsetKey::new(17);
		let b = CharsetKey::new(2024);

		assert_eq!(index.insert_first("sjis", a), InsertAction::InsertedNew);
		assert_eq!(index.insert_first("sjis", a), InsertAction::Unchanged);
		assert_eq!(index.insert_first("sjis", b), InsertAction::KeptExisting(a));
		assert_eq!(index.get("sjis"), Some(a));
	}

	/// Overwriting insertion returns the displaced key.
	#[test]
	fn test_insert_replaces() {
		let mut index = ShortNameIndex::new();
		let a = CharsetKey::new(4);
		let b = CharsetKey::new(2252);

		index.insert("latin1", a);
		assert_eq!(index.insert("latin1", b), InsertAction::ReplacedExisting(a));
		assert_eq!(index.lookup("Latin-1"), Some(b));
	}

	/// Reverse listing only yields names bound to the requested key.
	#[test]
	fn test_names_for() {
		let mut index = ShortNameIndex::new();
		let ascii = CharsetKey::new(3);
		index.insert("usascii", ascii);
		index.insert("ascii", ascii);
		index.insert("utf8", CharsetKey::new(106));

		let mut names: Vec<_> = index.names_for(ascii).collect();
		names.sort_unstable();
		assert_eq!(names, ["ascii", "usascii"]);
	}
}
