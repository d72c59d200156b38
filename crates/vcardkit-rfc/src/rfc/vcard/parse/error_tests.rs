//! Tests for vCard parse errors.

use super::error::{ParseError, ParseErrorKind};

#[test]
fn error_new() {
    let err = ParseError::new(ParseErrorKind::UnexpectedEof, 5, "test message");
    assert_eq!(err.line, 5);
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
    assert_eq!(err.message, "test message");
}

#[test]
fn error_unsupported_version() {
    let err = ParseError::unsupported_version(2, "5.0");
    assert_eq!(err.line, 2);
    assert_eq!(err.kind, ParseErrorKind::UnsupportedVersion);
    assert!(err.message.contains("5.0"));
}

#[test]
fn error_invalid_embedded_card() {
    let err = ParseError::invalid_embedded_card(9, "no card in AGENT value");
    assert_eq!(err.kind, ParseErrorKind::InvalidEmbeddedCard);
    assert_eq!(err.message, "no card in AGENT value");
}

#[test]
fn error_nesting_too_deep() {
    let err = ParseError::nesting_too_deep(40, 8);
    assert_eq!(err.line, 40);
    assert_eq!(err.kind, ParseErrorKind::NestingTooDeep);
    assert!(err.message.contains('8'));
}

#[test]
fn error_display() {
    let err = ParseError::new(ParseErrorKind::InvalidParameter, 12, "parameter without a name");
    let displayed = format!("{err}");
    assert!(displayed.contains("line 12"));
    assert!(displayed.contains("invalid parameter"));
    assert!(displayed.contains("parameter without a name"));
}

#[test]
fn error_kind_display() {
    assert_eq!(
        format!("{}", ParseErrorKind::UnexpectedEof),
        "unexpected end of input"
    );
    assert_eq!(
        format!("{}", ParseErrorKind::InvalidPropertyName),
        "invalid property name"
    );
    assert_eq!(
        format!("{}", ParseErrorKind::InvalidParameter),
        "invalid parameter"
    );
    assert_eq!(
        format!("{}", ParseErrorKind::UnsupportedVersion),
        "unsupported version"
    );
    assert_eq!(
        format!("{}", ParseErrorKind::InvalidEmbeddedCard),
        "invalid embedded card"
    );
    assert_eq!(
        format!("{}", ParseErrorKind::NestingTooDeep),
        "nesting too deep"
    );
}
