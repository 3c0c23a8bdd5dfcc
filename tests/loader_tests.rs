//! Integration tests for catalog and profile loading

use course_advisor::core::loader::{load_profile_toml, parse_catalog_csv};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_parse_sample_catalog() {
    let catalog = parse_catalog_csv("samples/catalog.csv").expect("parse sample catalog");

    assert_eq!(catalog.len(), 7);

    // File order defines catalog order
    let ids: Vec<&str> = catalog.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["CS101", "CS102", "CS103", "CS201", "CS202", "MATH201", "MATH202"]
    );

    let cs202 = catalog.lookup("CS202").expect("CS202 should exist");
    assert_eq!(cs202.name, "机器学习导论");
    assert_eq!(cs202.credits, 3);
    assert_eq!(
        cs202.prereqs,
        vec!["CS102".to_string(), "MATH201".to_string()]
    );
    assert_eq!(
        cs202.tags,
        vec!["AI".to_string(), "数据科学".to_string()]
    );

    let cs101 = catalog.lookup("CS101").expect("CS101 should exist");
    assert!(cs101.prereqs.is_empty());
    assert_eq!(cs101.credits, 4);

    // Every prerequisite in the sample resolves
    assert!(catalog.validate_references().is_ok());
}

#[test]
fn test_parse_sample_profile() {
    let profile = load_profile_toml("samples/profile.toml").expect("parse sample profile");

    assert_eq!(profile.id, "U1001");
    assert!(profile.has_completed("CS101"));
    assert!(profile.has_completed("MATH201"));
    assert_eq!(profile.completed_count(), 2);
    assert_eq!(
        profile.interests,
        vec!["AI".to_string(), "数据科学".to_string()]
    );
    assert_eq!(profile.current_term, 3);
}

#[test]
fn test_parse_nonexistent_catalog() {
    let result = parse_catalog_csv("samples/nonexistent.csv");
    assert!(result.is_err(), "Should fail for nonexistent file");
}

#[test]
fn test_parse_nonexistent_profile() {
    let result = load_profile_toml("samples/nonexistent.toml");
    assert!(result.is_err(), "Should fail for nonexistent file");
}

#[test]
fn test_malformed_catalog_rows_are_skipped() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "Course ID,Course Name,Credits,Prerequisites,Tags").expect("write");
    writeln!(file, "CS101,Intro,4,,AI").expect("write");
    writeln!(file, ",Missing Id,3,,").expect("write");
    writeln!(file, "CS102,Bad Credits,abc,,").expect("write");
    file.flush().expect("flush");

    let catalog = parse_catalog_csv(file.path()).expect("parse succeeds");

    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains("CS101"));
}

#[test]
fn test_profile_with_dangling_completed_id_loads() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "id = \"U2002\"").expect("write");
    writeln!(file, "completed = [\"GHOST999\"]").expect("write");
    file.flush().expect("flush");

    // Dangling ids are the engine's concern, not the loader's
    let profile = load_profile_toml(file.path()).expect("parse succeeds");
    assert!(profile.has_completed("GHOST999"));
}
