use std::fmt;

/// Identifies one naming taxonomy layered on the key space.
///
/// The built-in taxonomies have associated constants; callers installing a
/// [`ListedTaxonomy`](crate::taxonomy::ListedTaxonomy) mint their own with
/// [`TaxonomyId::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaxonomyId(&'static str);

impl TaxonomyId {
	/// The authoritative registry itself.
	pub const IANA: Self = Self("iana");
	/// WHATWG Encoding Standard names, as spelled by `encoding_rs`.
	pub const WHATWG: Self = Self("whatwg");
	/// Names accepted by the host `iconv` program.
	pub const ICONV: Self = Self("iconv");
	/// glibc locale charmap file names.
	pub const CHARMAP: Self = Self("charmap");

	pub const fn new(label: &'static str) -> Self {
		Self(label)
	}

	pub const fn as_str(self) -> &'static str {
		self.0
	}

	/// Returns true for the authoritative taxonomy.
	pub fn is_authoritative(self) -> bool {
		self == Self::IANA
	}
}

impl fmt::Display for TaxonomyId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.0)
	}
}
