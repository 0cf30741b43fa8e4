use std::path::PathBuf;

/// Failure to parse a dataset document as a whole.
///
/// Individual bad records are not errors; they are skipped and reported as
/// [`RecordIssue`]s.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
	#[error("dataset parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Non-fatal problem with a single dataset record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIssue {
	#[error("record #{index}: missing name")]
	MissingName { index: usize },

	#[error("record #{index} ({name}): missing key")]
	MissingKey { index: usize, name: String },

	#[error("record #{index} ({name}): key {key} is outside the authoritative range")]
	KeyOutOfRange { index: usize, name: String, key: u32 },

	#[error("record #{index} ({name}): key {key} already bound to {owner}")]
	DuplicateKey {
		index: usize,
		name: String,
		key: u32,
		owner: String,
	},

	#[error("record #{index} ({name}): name normalizes to an empty short name")]
	EmptyShortName { index: usize, name: String },
}

/// Taxonomy probe failures.
///
/// A failed probe marks its taxonomy absent for the registry's lifetime; the
/// error is kept for diagnostics but never surfaces through lookups.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
	#[error("program not found: {0}")]
	ProgramNotFound(String),

	#[error("{program} exited with {status}")]
	ExitStatus { program: String, status: std::process::ExitStatus },

	#[error("{0} produced non-UTF-8 output")]
	NonUtf8(String),

	#[error("directory not found: {}", .0.display())]
	MissingDirectory(PathBuf),

	#[error("enumeration is empty")]
	Empty,

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("config parse error: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("failed to read {}: {source}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("unknown taxonomy: {0}")]
	UnknownTaxonomy(String),
}

/// Global registry initialization errors.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
	#[error("charset registry already initialized")]
	AlreadyInitialized,
}
