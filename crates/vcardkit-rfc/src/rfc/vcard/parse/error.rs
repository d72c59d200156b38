//! vCard parse error types.

use std::fmt;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred during vCard parsing.
///
/// Problems in the input degrade and are logged with one of these; only
/// [`parse_single`](super::parse_single) on a document without cards
/// returns one.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Logical line where the error occurred (1-based).
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates an unsupported version error.
    #[must_use]
    pub fn unsupported_version(line: usize, version: &str) -> Self {
        Self::new(
            ParseErrorKind::UnsupportedVersion,
            line,
            format!("unsupported vCard version: {version}"),
        )
    }

    /// Creates an error for AGENT cards nested deeper than `limit`.
    #[must_use]
    pub fn nesting_too_deep(line: usize, limit: usize) -> Self {
        Self::new(
            ParseErrorKind::NestingTooDeep,
            line,
            format!("more than {limit} nested AGENT cards"),
        )
    }

    /// Creates an error for an embedded AGENT card that cannot be read.
    #[must_use]
    pub fn invalid_embedded_card(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidEmbeddedCard, line, message)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Unexpected end of input.
    UnexpectedEof,
    /// Invalid property name or missing value separator.
    InvalidPropertyName,
    /// Invalid parameter.
    InvalidParameter,
    /// Unsupported vCard version.
    UnsupportedVersion,
    /// AGENT value that looks like a card but is not one.
    InvalidEmbeddedCard,
    /// AGENT cards nested too deeply.
    NestingTooDeep,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::InvalidPropertyName => write!(f, "invalid property name"),
            Self::InvalidParameter => write!(f, "invalid parameter"),
            Self::UnsupportedVersion => write!(f, "unsupported version"),
            Self::InvalidEmbeddedCard => write!(f, "invalid embedded card"),
            Self::NestingTooDeep => write!(f, "nesting too deep"),
        }
    }
}
