use std::fs;

use pretty_assertions::assert_eq;
use tagkit_core::{join_tags, FailureKind};
use tagkit_engine::{load_tag_pool, TagError};
use tempfile::TempDir;

#[test]
fn loads_trimmed_entries_in_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tags.txt");
    fs::write(&path, "glasses, large breasts (12345) ,\n ponytail,,").unwrap();

    let pool = load_tag_pool(&path).unwrap();
    assert_eq!(
        pool.as_slice(),
        ["glasses", "large breasts (12345)", "ponytail"]
    );
    assert_eq!(
        join_tags(pool.as_slice(), ","),
        "glasses,large breasts (12345),ponytail"
    );
}

#[test]
fn utf8_bom_is_ignored() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bom.txt");
    fs::write(&path, b"\xEF\xBB\xBFalpha, beta").unwrap();

    let pool = load_tag_pool(&path).unwrap();
    assert_eq!(pool.as_slice(), ["alpha", "beta"]);
}

#[test]
fn missing_file_is_file_not_found() {
    let temp = TempDir::new().unwrap();
    let err = load_tag_pool(&temp.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, TagError::FileNotFound { .. }), "{err:?}");
    assert_eq!(err.kind(), FailureKind::FileNotFound);
}

#[test]
fn blank_file_is_empty_pool() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("blank.txt");
    fs::write(&path, " , ,\n").unwrap();

    let err = load_tag_pool(&path).unwrap_err();
    assert_eq!(err.kind(), FailureKind::EmptyPool);
}

#[test]
fn invalid_utf8_is_read_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9, tea").unwrap();

    let err = load_tag_pool(&path).unwrap_err();
    assert!(matches!(err, TagError::Decode { .. }), "{err:?}");
    assert_eq!(err.kind(), FailureKind::ReadError);
}

#[test]
fn directory_path_is_read_error() {
    let temp = TempDir::new().unwrap();
    let err = load_tag_pool(temp.path()).unwrap_err();
    assert_eq!(err.kind(), FailureKind::ReadError);
}
