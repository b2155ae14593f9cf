//! Error context extension tests

use cfprov_domain::Error;
use cfprov_infrastructure::ErrorContext;
use std::error::Error as _;
use std::io;

fn failing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn test_context_wraps_as_infrastructure_error() {
    let err = failing().context("Failed to read bindings").unwrap_err();

    assert!(matches!(err, Error::Infrastructure { .. }));
    assert!(err.to_string().contains("Failed to read bindings: no such file"));
    assert!(err.source().is_some());
}

#[test]
fn test_with_context_is_lazy() {
    let mut evaluated = false;
    let ok: Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| {
            evaluated = true;
            "unused"
        })
        .unwrap();

    assert_eq!(value, 1);
    assert!(!evaluated);
}

#[test]
fn test_config_context_wraps_as_configuration_error() {
    let err = failing().config_context("Missing config").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}
