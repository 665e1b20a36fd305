//! Tests for error context extensions

use std::io;

use wirekit_domain::Error;
use wirekit_infrastructure::ErrorContext;

fn failing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
}

#[test]
fn test_context_produces_internal_error() {
    let err = failing().context("Loading").unwrap_err();
    assert!(matches!(&err, Error::Internal { message } if message == "Loading: gone"));
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);

    let err = failing().with_context(|| "Lazy".to_string()).unwrap_err();
    assert!(err.to_string().contains("Lazy: gone"));
}

#[test]
fn test_typed_contexts_keep_source() {
    let err = failing().io_context("Reading").unwrap_err();
    assert!(matches!(&err, Error::Io { source: Some(_), .. }));

    let err = failing().config_context("Config").unwrap_err();
    assert!(matches!(&err, Error::Configuration { source: Some(_), .. }));

    let err = failing().manifest_context("Manifest").unwrap_err();
    assert!(matches!(&err, Error::Manifest { source: Some(_), .. }));
    assert_eq!(err.to_string(), "Manifest error: Manifest: gone");
}
