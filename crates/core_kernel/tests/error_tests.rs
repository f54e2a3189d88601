//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::PortError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("Missing config");

    match error {
        CoreError::Configuration(msg) => assert_eq!(msg, "Missing config"),
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    let display = format!("{}", error);

    assert!(display.contains("Validation error"));
}

#[test]
fn test_port_error_internal_display() {
    let error = PortError::internal("boom");
    assert_eq!(error.to_string(), "Internal error: boom");
}

#[test]
fn test_port_error_store_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk unplugged");
    let error = PortError::store(io);

    assert!(matches!(error, PortError::Store(_)));
    assert_eq!(error.to_string(), "disk unplugged");
}
