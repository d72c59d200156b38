//! vCard parsing (2.1, 3.0, RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse::parse(input).unwrap();
//! assert_eq!(cards[0].formatted_name(), Some("John Doe"));
//! ```
//!
//! ## Features
//!
//! - Supports vCard 2.1, 3.0 and 4.0
//! - Handles line folding/unfolding and quoted-printable soft breaks
//! - Parses property groups (item1.TEL) and 2.1 bare parameters
//! - Decodes QUOTED-PRINTABLE with the declared CHARSET
//! - Parses partial/truncated dates
//! - Reads embedded AGENT cards
//! - RFC 6868 caret encoding for parameters

mod error;
mod lexer;
mod parser;
mod values;

#[cfg(test)]
mod error_tests;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, parse_content_line, split_lines};
pub use parser::{parse, parse_single};
pub use values::{
    PartialDate, PartialTime, parse_date, parse_time, parse_timestamp, parse_utc_offset,
    split_component, split_structured, unescape_text,
};
