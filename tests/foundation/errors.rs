//! Integration tests for Error types

use inlinegen_foundation::{CancellationToken, Error, ErrorContext, ErrorKind};

#[test]
fn cancellation_token_is_shared() {
    let token = CancellationToken::new();
    let clone = token.clone();
    assert!(token.check().is_ok());
    clone.cancel();
    assert!(token.is_cancelled());
    assert!(token.check().unwrap_err().is_cancelled());
}

#[test]
fn error_kinds_display() {
    assert_eq!(Error::cancelled().to_string(), "operation cancelled");
    assert_eq!(
        Error::new(ErrorKind::Io("disk full".into())).to_string(),
        "io error: disk full"
    );
    assert_eq!(
        Error::new(ErrorKind::Serialization("bad marker".into())).to_string(),
        "serialization error: bad marker"
    );
}

#[test]
fn context_is_optional() {
    let err = Error::malformed("empty identity");
    assert!(err.context.is_none());
    let err = err.with_context(ErrorContext::new().with_phase("ingest"));
    assert_eq!(err.context.unwrap().to_string(), "during ingest");
}
