//! Config file loading.

use std::path::{Path, PathBuf};

use super::{CharsetConfig, ConfigError};

/// Environment variable naming a config file for the global registry.
pub const CONFIG_ENV: &str = "XENO_CHARSET_CONFIG";

/// Result of loading a config file.
#[derive(Debug, Default)]
pub struct ConfigLoadReport {
	/// Parsed config if the file existed and was valid.
	pub config: Option<CharsetConfig>,
	/// File read or parse errors keyed by source file path.
	pub errors: Vec<(PathBuf, String)>,
}

impl ConfigLoadReport {
	/// Returns the loaded config, or the defaults.
	pub fn into_config(self) -> CharsetConfig {
		self.config.unwrap_or_default()
	}
}

/// Loads the config at `path`.
///
/// A missing file is not an error: the report simply carries no config.
pub fn load_config(path: &Path) -> ConfigLoadReport {
	let mut report = ConfigLoadReport::default();
	if !path.exists() {
		return report;
	}

	match read_config(path) {
		Ok(config) => report.config = Some(config),
		Err(error) => report.errors.push((path.to_path_buf(), error.to_string())),
	}
	report
}

fn read_config(path: &Path) -> Result<CharsetConfig, ConfigError> {
	let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	CharsetConfig::parse_str(&content)
}

/// Loads the config named by [`CONFIG_ENV`], if set.
pub(crate) fn load_from_env() -> Option<ConfigLoadReport> {
	let path = std::env::var_os(CONFIG_ENV)?;
	Some(load_config(Path::new(&path)))
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Missing files produce neither a config nor an error.
	#[test]
	fn test_load_ignores_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let report = load_config(&dir.path().join("charset.toml"));
		assert!(report.config.is_none());
		assert!(report.errors.is_empty());
	}

	/// A valid file loads.
	#[test]
	fn test_load_valid_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("charset.toml");
		std::fs::write(&path, "[taxonomies]\niconv = false\n").unwrap();

		let report = load_config(&path);
		let config = report.config.expect("config should load");
		assert!(!config.taxonomies.iconv);
		assert!(config.taxonomies.whatwg);
	}

	/// Parse errors are collected against the file path, not raised.
	#[test]
	fn test_load_collects_parse_errors() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("charset.toml");
		std::fs::write(&path, "spelling_policy = 3").unwrap();

		let report = load_config(&path);
		assert!(report.config.is_none());
		assert_eq!(report.errors.len(), 1);
		assert_eq!(report.errors[0].0, path);
		assert_eq!(report.into_config(), CharsetConfig::default());
	}

	/// A directory in place of a file is a read error.
	#[test]
	fn test_load_directory_is_read_error() {
		let dir = tempfile::tempdir().unwrap();
		let report = load_config(dir.path());
		assert!(report.config.is_none());
		assert!(report.errors[0].1.starts_with("failed to read"));
	}
}
