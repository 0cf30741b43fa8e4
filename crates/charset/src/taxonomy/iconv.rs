//! Names accepted by the host `iconv` program.
//!
//! Two listing formats exist in the wild. glibc prints one name per line with
//! a trailing `//` when stdout is not a terminal, every alias on its own line.
//! GNU libiconv prints one encoding per line with its aliases separated by
//! spaces. [`parse_listing`] accepts both.

use std::ffi::OsString;
use std::process::Command;

use super::{SpellingOverride, TaxonomyId, TaxonomyRecord, TaxonomySource};
use crate::core::ProbeError;

/// glibc lists many names per encoding; pin the conventional spelling so
/// whichever alias sorts last does not win.
pub(crate) const OVERRIDES: &[SpellingOverride] = &[
	SpellingOverride::new("UTF-8", "UTF-8"),
	SpellingOverride::new("UTF-16", "UTF-16"),
	SpellingOverride::new("UTF-32", "UTF-32"),
	SpellingOverride::new("ISO-8859-1", "ISO-8859-1"),
	SpellingOverride::new("ASCII", "US-ASCII"),
	SpellingOverride::new("SHIFT_JIS", "Shift_JIS"),
	SpellingOverride::new("EUC-JP", "EUC-JP"),
	SpellingOverride::new("CP932", "Windows-31J"),
];

/// The iconv taxonomy, probed by running `<program> -l`.
#[derive(Debug, Clone)]
pub struct IconvTaxonomy {
	program: OsString,
}

impl IconvTaxonomy {
	pub fn new(program: impl Into<OsString>) -> Self {
		Self {
			program: program.into(),
		}
	}
}

impl Default for IconvTaxonomy {
	fn default() -> Self {
		Self::new("iconv")
	}
}

impl TaxonomySource for IconvTaxonomy {
	fn id(&self) -> TaxonomyId {
		TaxonomyId::ICONV
	}

	fn probe(&self) -> Result<Vec<TaxonomyRecord>, ProbeError> {
		let display = self.program.to_string_lossy().into_owned();
		let path = which::which(&self.program).map_err(|_| ProbeError::ProgramNotFound(display.clone()))?;

		let output = Command::new(path).arg("-l").output()?;
		if !output.status.success() {
			return Err(ProbeError::ExitStatus {
				program: display,
				status: output.status,
			});
		}
		let stdout = String::from_utf8(output.stdout).map_err(|_| ProbeError::NonUtf8(display))?;

		let records = parse_listing(&stdout);
		if records.is_empty() {
			return Err(ProbeError::Empty);
		}
		Ok(records)
	}

	fn overrides(&self) -> &[SpellingOverride] {
		OVERRIDES
	}
}

/// Parses `iconv -l` output in either glibc or libiconv format.
///
/// glibc terminates names with `//`, except names that already contain a
/// slash, which get a single trailing `/`.
pub fn parse_listing(output: &str) -> Vec<TaxonomyRecord> {
	if output.contains("//") {
		output
			.split(|c: char| c == ',' || c.is_whitespace())
			.filter_map(|token| token.strip_suffix("//").or_else(|| token.strip_suffix('/')))
			.filter(|name| !name.is_empty())
			.map(TaxonomyRecord::single)
			.collect()
	} else {
		output
			.lines()
			.filter_map(|line| {
				let mut names = line.split_whitespace();
				let spelling = names.next()?;
				Some(TaxonomyRecord::with_variants(spelling, names))
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// glibc's piped format yields one record per name.
	#[test]
	fn test_parse_glibc_listing() {
		let out = "ANSI_X3.4-1968//\nASCII//\nUTF-8//\nUTF8//\n";
		let records = parse_listing(out);
		let names: Vec<_> = records.iter().map(|r| r.spelling.as_str()).collect();
		assert_eq!(names, ["ANSI_X3.4-1968", "ASCII", "UTF-8", "UTF8"]);
		assert!(records.iter().all(|r| r.variants.len() == 1));
	}

	/// Names containing a slash keep it and lose only the trailing one.
	#[test]
	fn test_parse_glibc_slash_names() {
		let out = "ISO-10646/UTF8/\nISO/TR_11548-1/\nUTF-8//\n10646-1:1993/UCS4/\n";
		let names: Vec<_> = parse_listing(out).into_iter().map(|r| r.spelling).collect();
		assert_eq!(names, ["ISO-10646/UTF8", "ISO/TR_11548-1", "UTF-8", "10646-1:1993/UCS4"]);
	}

	/// glibc's terminal format wraps comma-separated names.
	#[test]
	fn test_parse_glibc_wrapped_listing() {
		let out = "  437//, 500//, 500V1//,\n  UTF-8//, UTF8//\n";
		let names: Vec<_> = parse_listing(out).into_iter().map(|r| r.spelling).collect();
		assert_eq!(names, ["437", "500", "500V1", "UTF-8", "UTF8"]);
	}

	/// libiconv groups aliases on one line, first name first.
	#[test]
	fn test_parse_libiconv_listing() {
		let out = "ANSI_X3.4-1968 ASCII US-ASCII CSASCII\nUTF-8\n\nSHIFT_JIS SJIS MS_KANJI\n";
		let records = parse_listing(out);

		assert_eq!(records.len(), 3);
		assert_eq!(records[0].spelling, "ANSI_X3.4-1968");
		assert_eq!(records[0].variants, ["ANSI_X3.4-1968", "ASCII", "US-ASCII", "CSASCII"]);
		assert_eq!(records[1].variants, ["UTF-8"]);
		assert_eq!(records[2].spelling, "SHIFT_JIS");
	}

	/// A program that does not exist marks the taxonomy absent.
	#[test]
	fn test_missing_program() {
		let taxonomy = IconvTaxonomy::new("definitely-not-an-iconv-binary");
		assert!(matches!(taxonomy.probe(), Err(ProbeError::ProgramNotFound(_))));
	}
}
