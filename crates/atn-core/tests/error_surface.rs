use std::io;
use std::path::Path;

use atn_core::errors::{AtnError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("id", "1")
        .with_context("reason", "example")
}

#[test]
fn parse_error_surface() {
    let err = AtnError::Parse(sample_info("P001", "bad token"));
    assert_eq!(err.info().code, "P001");
    assert!(err.info().context.contains_key("id"));
    assert!(!err.is_not_found());
}

#[test]
fn not_found_is_distinguished_from_io() {
    let missing = AtnError::from_io(
        "read",
        Path::new("/nowhere"),
        io::Error::new(io::ErrorKind::NotFound, "gone"),
    );
    assert!(missing.is_not_found());
    assert_eq!(missing.info().context["path"], "/nowhere");

    let denied = AtnError::from_io(
        "read",
        Path::new("/nowhere"),
        io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
    );
    assert!(matches!(denied, AtnError::Io(_)));
    assert!(!denied.is_not_found());
}

#[test]
fn already_exists_maps_to_its_own_family() {
    let err = AtnError::from_io(
        "mkdir",
        Path::new("out"),
        io::Error::new(io::ErrorKind::AlreadyExists, "exists"),
    );
    assert!(matches!(err, AtnError::AlreadyExists(_)));
}

#[test]
fn display_includes_context_and_hint() {
    let err = AtnError::Runner(sample_info("R001", "exit status 2").with_hint("check runner logs"));
    let rendered = err.to_string();
    assert!(rendered.starts_with("runner error: exit status 2 (code: R001)"));
    assert!(rendered.contains("id=1, reason=example"));
    assert!(rendered.ends_with("hint: check runner logs"));
}

#[test]
fn errors_round_trip_json() {
    let err = AtnError::Config(sample_info("C001", "missing field"));
    let json = serde_json::to_string(&err).expect("serialize");
    let decoded: AtnError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
