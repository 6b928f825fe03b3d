use super::*;
use std::error::Error;

#[test]
fn test_file_error_display() {
    let err = FileError::NotFound(PathBuf::from("/test"));
    assert!(err.to_string().contains("/test"));

    let err = FileError::AlreadyExists(PathBuf::from("/dst.dat"));
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn test_io_error_keeps_source() {
    let err = FileError::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
    assert!(matches!(err, FileError::Io(_)));
    assert!(err.source().is_some());
}

#[test]
fn test_json_error_becomes_parse() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = FileError::from(json_err);
    assert!(matches!(err, FileError::Parse(_)));
    assert!(err.source().is_none());
}
