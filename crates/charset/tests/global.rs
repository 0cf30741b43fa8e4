//! The process-wide registry.

use xeno_charset::config::CharsetConfig;
use xeno_charset::core::InitError;
use xeno_charset::{CharsetKey, TaxonomyId, TaxonomyStatus};

/// `init` configures the global registry once; the free functions then use it.
#[test]
fn test_init_then_query() {
	let config = CharsetConfig::parse_str(
		r#"
[taxonomies]
whatwg = false
iconv = false
charmap = false

[[alias]]
alias = "house-encoding"
target = "UTF-8"
"#,
	)
	.unwrap();

	let db = xeno_charset::init(&config).expect("first init succeeds");
	assert_eq!(db.taxonomy_status(TaxonomyId::ICONV), Some(&TaxonomyStatus::Disabled));
	assert!(matches!(
		xeno_charset::init(&CharsetConfig::default()),
		Err(InitError::AlreadyInitialized)
	));

	assert_eq!(xeno_charset::canonical_name("house encoding"), Some("UTF-8"));
	assert_eq!(xeno_charset::canonical_name("x-x-sjis"), Some("Shift_JIS"));
	assert_eq!(xeno_charset::preferred_mime_name("ansi_x3.4-1968"), Some("US-ASCII"));
	assert_eq!(xeno_charset::key_for_name("ANSI_X3.4-1968"), Some(CharsetKey::new(3)));
	assert_eq!(xeno_charset::name_for_key(CharsetKey::new(1015)), Some("UTF-16"));
	assert_eq!(xeno_charset::whatwg_name("utf-8"), None);
	assert_eq!(xeno_charset::iconv_name("utf-8"), None);
	assert_eq!(xeno_charset::charmap_name("utf-8"), None);
	assert!(xeno_charset::all_canonical_names().contains(&"UTF-16"));

	assert_eq!(xeno_charset::add_alias(TaxonomyId::IANA, "a", "Shift_JIS"), Some("Shift_JIS"));
	assert_eq!(xeno_charset::add_alias(TaxonomyId::IANA, "b", "a"), Some("Shift_JIS"));
	assert_eq!(xeno_charset::canonical_name("b"), Some("Shift_JIS"));
	assert_eq!(xeno_charset::taxonomy_name(TaxonomyId::IANA, "b"), Some("Shift_JIS"));
}
