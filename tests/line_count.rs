#![cfg(feature = "std")]

use std::io;
use std::path::PathBuf;

use quatern::lines::{meaningful_line_count, LineCountError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn mixed_file() {
    assert_eq!(meaningful_line_count(fixture("mixed.txt")), Ok(5));
}

#[test]
fn comments_and_blanks_only() {
    assert_eq!(meaningful_line_count(fixture("comments_only.txt")), Ok(0));
}

#[test]
fn windows_line_endings() {
    assert_eq!(meaningful_line_count(fixture("crlf.txt")), Ok(2));
}

#[test]
fn classic_mac_line_endings() {
    assert_eq!(meaningful_line_count(fixture("cr_only.txt")), Ok(2));
}

#[test]
fn missing_file_propagates() {
    let path = fixture("does-not-exist.txt");
    match meaningful_line_count(&path) {
        Err(LineCountError::Open { path: p, kind }) => {
            assert_eq!(p, path);
            assert_eq!(kind, io::ErrorKind::NotFound);
        }
        other => panic!("expected open error, got {:?}", other),
    }
}

#[test]
fn directory_is_not_countable() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests");
    assert!(meaningful_line_count(dir).is_err());
}
