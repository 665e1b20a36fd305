//! Unit tests for domain error types

use wirekit_domain::Error;

#[test]
fn test_not_registered_error() {
    let error = Error::not_registered("Katana");
    assert!(error.to_string().contains("Katana"));
    assert!(error.is_planning_error());
    match error {
        Error::NotRegistered { service } => assert_eq!(service, "Katana"),
        _ => panic!("Expected NotRegistered error"),
    }
}

#[test]
fn test_ambiguous_match_error() {
    let error = Error::ambiguous_match("Weapon");
    assert_eq!(error.to_string(), "Ambiguous match for service: Weapon");
}

#[test]
fn test_circular_dependency_error_names_both_services() {
    let error = Error::circular_dependency("A", "B");
    let message = error.to_string();
    assert!(message.contains('A'));
    assert!(message.contains('B'));
    match error {
        Error::CircularDependency { service, tail } => {
            assert_eq!(service, "A");
            assert_eq!(tail, "B");
        }
        _ => panic!("Expected CircularDependency error"),
    }
}

#[test]
fn test_arity_mismatch_error() {
    let error = Error::arity_mismatch("Ninja", 1, 2);
    assert!(error.to_string().contains("Ninja"));
    match error {
        Error::ArityMismatch {
            class,
            declared,
            required,
        } => {
            assert_eq!(class, "Ninja");
            assert_eq!(declared, 1);
            assert_eq!(required, 2);
        }
        _ => panic!("Expected ArityMismatch error"),
    }
}

#[test]
fn test_missing_annotation_errors() {
    let error = Error::missing_injectable("Katana");
    assert!(error.to_string().contains("Katana"));

    let error = Error::missing_inject("Ninja", 1);
    assert!(error.to_string().contains("argument 1 in class Ninja"));
}

#[test]
fn test_planning_depth_error() {
    let error = Error::planning_depth_exceeded("Layer", 16);
    assert!(error.to_string().contains("16"));
    assert!(error.is_planning_error());
}

#[test]
fn test_non_planning_errors() {
    assert!(!Error::not_found("snapshot").is_planning_error());
    assert!(!Error::invalid_argument("empty identifier").is_planning_error());
    assert!(!Error::configuration("bad depth").is_planning_error());
    assert!(!Error::manifest("bad manifest").is_planning_error());
}

#[test]
fn test_io_error_from() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: Error = io.into();
    assert!(matches!(error, Error::IoSimple { .. }));
}

#[test]
fn test_error_with_source() {
    let io = std::io::Error::other("disk");
    let error = Error::manifest_with_source("unreadable", io);
    assert!(std::error::Error::source(&error).is_some());
}
