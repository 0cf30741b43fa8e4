//! Attempt order for resolving caller input to a key.

use crate::core::{CharsetKey, normalize};

/// Vendor-extension prefix that may be stacked in front of a name.
const EXTENSION_PREFIX: &str = "x-";

/// Maximum number of stacked extension prefixes stripped before giving up.
pub(crate) const MAX_PREFIX_STRIPS: usize = 2;

/// Resolves `input` by probing `lookup` with normalized short names.
///
/// The raw input is tried first; then, while the remainder starts with `x-`
/// (ASCII case-insensitive, after trimming whitespace), one prefix is stripped
/// and the rest normalized and tried again. The first hit wins.
pub(crate) fn resolve_with(input: &str, lookup: impl Fn(&str) -> Option<CharsetKey>) -> Option<CharsetKey> {
	let short = normalize(input);
	if short.is_empty() {
		return None;
	}
	if let Some(key) = lookup(&short) {
		return Some(key);
	}

	let mut rest = input.trim();
	for _ in 0..MAX_PREFIX_STRIPS {
		rest = strip_prefix(rest)?;
		let short = normalize(rest);
		if short.is_empty() {
			return None;
		}
		if let Some(key) = lookup(&short) {
			return Some(key);
		}
	}
	None
}

fn strip_prefix(input: &str) -> Option<&str> {
	let head = input.get(..EXTENSION_PREFIX.len())?;
	head.eq_ignore_ascii_case(EXTENSION_PREFIX)
		.then(|| input[EXTENSION_PREFIX.len()..].trim_start())
}
