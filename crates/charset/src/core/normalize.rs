//! Short-name folding.
//!
//! Every lookup key in the registry passes through [`normalize`] before it
//! touches an index, so `"Windows_1252"`, `"windows-1252"` and `"WINDOWS1252"`
//! all land on the same slot.

/// Folds an encoding name into its short-name comparison key.
///
/// Lower-cases ASCII letters and drops every character that is not an ASCII
/// letter or digit. Non-ASCII input is dropped rather than case-folded, so the
/// result never depends on locale tables.
pub fn normalize(name: &str) -> String {
	name.chars()
		.filter(char::is_ascii_alphanumeric)
		.map(|c| c.to_ascii_lowercase())
		.collect()
}

/// Returns true if `name` is already in short-name form.
pub fn is_normalized(name: &str) -> bool {
	name.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	/// Punctuation and case differences collapse to one key.
	#[test]
	fn test_punctuation_and_case_fold() {
		assert_eq!(normalize("Windows_1252"), "windows1252");
		assert_eq!(normalize("windows-1252"), "windows1252");
		assert_eq!(normalize("ISO_8859-1:1987"), "iso885911987");
		assert_eq!(normalize("  utf 8 "), "utf8");
	}

	/// Non-ASCII characters are removed, not transliterated.
	#[test]
	fn test_non_ascii_dropped() {
		assert_eq!(normalize("ÜTF-8"), "tf8");
		assert_eq!(normalize("—"), "");
		assert_eq!(normalize(""), "");
	}

	proptest! {
		#[test]
		fn test_normalize_idempotent(s in any::<String>()) {
			let once = normalize(&s);
			prop_assert_eq!(normalize(&once), once.clone());
			prop_assert!(is_normalized(&once));
		}

		#[test]
		fn test_normalize_ignores_ascii_case(s in "[ -~]{0,32}") {
			prop_assert_eq!(normalize(&s.to_ascii_uppercase()), normalize(&s));
		}
	}
}
