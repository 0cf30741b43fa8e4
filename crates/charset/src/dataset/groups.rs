//! Hand-authored equivalence groups.
//!
//! Spellings seen in the wild that the registry never recorded. Each group is
//! applied after the dataset loads: the head is resolved through the short-name
//! index and every alias is bound to the head's key.

/// A head name and the extra spellings that mean the same encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquivalenceGroup {
	pub head: &'static str,
	pub aliases: &'static [&'static str],
}

impl EquivalenceGroup {
	pub const fn new(head: &'static str, aliases: &'static [&'static str]) -> Self {
		Self { head, aliases }
	}
}

pub const EQUIVALENCE_GROUPS: &[EquivalenceGroup] = &[
	EquivalenceGroup::new("US-ASCII", &["ascii", "646", "ascii7"]),
	EquivalenceGroup::new("UTF-8", &["utf8mb4", "unicode-1-1-utf-8", "unicode11utf8"]),
	EquivalenceGroup::new("UTF-16", &["ucs-2-internal", "unicode"]),
	EquivalenceGroup::new("ISO-10646-UCS-2", &["ucs-2", "ucs2", "iso-10646-ucs-2-be"]),
	EquivalenceGroup::new("ISO-10646-UCS-4", &["ucs-4", "ucs4"]),
	EquivalenceGroup::new("Shift_JIS", &["sjis", "shift-jis", "s-jis"]),
	EquivalenceGroup::new("Windows-31J", &["cp932", "ms932", "sjis-win", "sjis-open"]),
	EquivalenceGroup::new("EUC-JP", &["ujis", "eucjp-open"]),
	EquivalenceGroup::new("GB2312", &["euc-cn", "eucgb2312-cn"]),
	EquivalenceGroup::new("KS_C_5601-1987", &["cp949", "uhc", "ks_c_5601"]),
	EquivalenceGroup::new("Big5", &["big-five", "cn-big5", "bigfive"]),
	EquivalenceGroup::new("Big5-HKSCS", &["big5hk", "hkscs"]),
	EquivalenceGroup::new("macintosh", &["mac-roman", "macroman"]),
	EquivalenceGroup::new("TIS-620", &["tis620-0", "tis620.2529-1", "tis620.2533-0", "iso-ir-166"]),
	EquivalenceGroup::new("ISO-8859-15", &["latin-0", "latin0"]),
	EquivalenceGroup::new("ISO-8859-8-I", &["logical"]),
	EquivalenceGroup::new("ISO-8859-8", &["visual"]),
	EquivalenceGroup::new("windows-1250", &["cp1250", "ms-ee"]),
	EquivalenceGroup::new("windows-1251", &["cp1251", "ms-cyrl"]),
	EquivalenceGroup::new("windows-1252", &["cp1252", "ms-ansi"]),
	EquivalenceGroup::new("windows-1253", &["cp1253", "ms-greek"]),
	EquivalenceGroup::new("windows-1254", &["cp1254", "ms-turk"]),
	EquivalenceGroup::new("windows-1255", &["cp1255", "ms-hebr"]),
	EquivalenceGroup::new("windows-1256", &["cp1256", "ms-arab"]),
	EquivalenceGroup::new("windows-1257", &["cp1257", "winbaltrim"]),
	EquivalenceGroup::new("windows-1258", &["cp1258"]),
	EquivalenceGroup::new("windows-874", &["cp874", "ms874"]),
	EquivalenceGroup::new("KOI8-R", &["koi8"]),
	EquivalenceGroup::new("KOI8-U", &["koi8-ru"]),
];
