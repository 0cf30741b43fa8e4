//! WHATWG Encoding Standard names, enumerated from `encoding_rs`.

use encoding_rs::Encoding;

use super::{SpellingOverride, TaxonomyId, TaxonomyRecord, TaxonomySource};
use crate::core::ProbeError;

/// Browser-compatible labels map these registry encodings onto a WHATWG
/// superset decoder.
const OVERRIDES: &[SpellingOverride] = &[
	SpellingOverride::new("windows-1252", "ISO-8859-1"),
	SpellingOverride::new("windows-1252", "US-ASCII"),
	SpellingOverride::new("windows-1254", "ISO-8859-9"),
	SpellingOverride::new("windows-874", "TIS-620"),
	SpellingOverride::new("GBK", "GB2312"),
	SpellingOverride::new("EUC-KR", "KS_C_5601-1987"),
	SpellingOverride::new("UTF-16LE", "UTF-16"),
];

/// Every encoding `encoding_rs` can decode.
fn encodings() -> Vec<&'static Encoding> {
	use encoding_rs::*;

	vec![
		UTF_8,
		IBM866,
		ISO_8859_2,
		ISO_8859_3,
		ISO_8859_4,
		ISO_8859_5,
		ISO_8859_6,
		ISO_8859_7,
		ISO_8859_8,
		ISO_8859_8_I,
		ISO_8859_10,
		ISO_8859_13,
		ISO_8859_14,
		ISO_8859_15,
		ISO_8859_16,
		KOI8_R,
		KOI8_U,
		MACINTOSH,
		WINDOWS_874,
		WINDOWS_1250,
		WINDOWS_1251,
		WINDOWS_1252,
		WINDOWS_1253,
		WINDOWS_1254,
		WINDOWS_1255,
		WINDOWS_1256,
		WINDOWS_1257,
		WINDOWS_1258,
		X_MAC_CYRILLIC,
		GBK,
		GB18030,
		BIG5,
		EUC_JP,
		ISO_2022_JP,
		SHIFT_JIS,
		EUC_KR,
		REPLACEMENT,
		UTF_16BE,
		UTF_16LE,
		X_USER_DEFINED,
	]
}

/// The WHATWG taxonomy. Always installed when the `whatwg` feature is on.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatwgTaxonomy;

impl TaxonomySource for WhatwgTaxonomy {
	fn id(&self) -> TaxonomyId {
		TaxonomyId::WHATWG
	}

	fn probe(&self) -> Result<Vec<TaxonomyRecord>, ProbeError> {
		Ok(encodings()
			.into_iter()
			.map(|encoding| TaxonomyRecord::single(encoding.name()))
			.collect())
	}

	fn overrides(&self) -> &[SpellingOverride] {
		OVERRIDES
	}
}
