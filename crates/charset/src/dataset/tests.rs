use super::*;

/// The embedded snapshot parses cleanly and carries the well-known fixed points.
#[test]
fn test_embedded_dataset_parses() {
	let dataset = Dataset::embedded().expect("embedded dataset must parse");
	assert!(dataset.issues().is_empty(), "issues: {:?}", dataset.issues());

	let ascii = dataset
		.records()
		.iter()
		.find(|r| r.key == CharsetKey::new(3))
		.expect("key 3 present");
	assert_eq!(ascii.name, "ANSI_X3.4-1968");
	assert_eq!(ascii.preferred.as_deref(), Some("US-ASCII"));

	let utf16 = dataset
		.records()
		.iter()
		.find(|r| r.key == CharsetKey::new(1015))
		.expect("key 1015 present");
	assert_eq!(utf16.name, "UTF-16");
}

/// Records missing a name or a key are skipped without failing the document.
#[test]
fn test_malformed_records_skipped() {
	let input = r#"
		[[charset]]
		mib = 3
		aliases = ["orphan"]

		[[charset]]
		name = "NoKey"

		[[charset]]
		name = "UTF-8"
		mib = 106
	"#;
	let dataset = Dataset::parse(input).expect("document is valid TOML");

	assert_eq!(dataset.len(), 1);
	assert_eq!(dataset.records()[0].name, "UTF-8");
	assert_eq!(
		dataset.issues(),
		[
			RecordIssue::MissingName { index: 0 },
			RecordIssue::MissingKey {
				index: 1,
				name: "NoKey".into()
			},
		]
	);
}

/// A key already owned by an earlier record is never rebound.
#[test]
fn test_duplicate_key_rejected() {
	let input = r#"
		[[charset]]
		name = "UTF-16"
		mib = 1015

		[[charset]]
		name = "UTF-16-Imposter"
		mib = 1015
	"#;
	let dataset = Dataset::parse(input).unwrap();

	assert_eq!(dataset.len(), 1);
	assert_eq!(dataset.records()[0].name, "UTF-16");
	assert!(matches!(
		&dataset.issues()[0],
		RecordIssue::DuplicateKey { key: 1015, owner, .. } if owner == "UTF-16"
	));
}

/// Keys in the synthetic namespace or below zero are rejected.
#[test]
fn test_out_of_range_keys_rejected() {
	let input = format!(
		r#"
		[[charset]]
		name = "Negative"
		mib = -1

		[[charset]]
		name = "TooBig"
		mib = {}
	"#,
		SYNTHETIC_BASE
	);
	let dataset = Dataset::parse(&input).unwrap();

	assert!(dataset.is_empty());
	assert_eq!(dataset.issues().len(), 2);
	assert!(
		dataset
			.issues()
			.iter()
			.all(|i| matches!(i, RecordIssue::KeyOutOfRange { .. }))
	);
}

/// A document that is not TOML fails as a whole.
#[test]
fn test_invalid_document_errors() {
	assert!(Dataset::parse("[[charset]\nname = ").is_err());
}

/// Every built-in equivalence group head names a dataset entry.
#[test]
fn test_equivalence_group_heads_resolve() {
	let dataset = Dataset::embedded().unwrap();
	let mut names = crate::core::ShortNameIndex::new();
	for record in dataset.records() {
		names.insert(&normalize(&record.name), record.key);
		for alias in &record.aliases {
			let short = normalize(alias);
			if !short.is_empty() {
				names.insert_first(&short, record.key);
			}
		}
	}

	for group in EQUIVALENCE_GROUPS {
		assert!(
			names.lookup(group.head).is_some(),
			"group head {:?} does not resolve",
			group.head
		);
		assert!(!group.aliases.is_empty(), "group {:?} has no aliases", group.head);
	}
}
