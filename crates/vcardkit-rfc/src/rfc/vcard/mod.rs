//! vCard implementation (2.1, RFC 2426, RFC 6350).
//!
//! This module provides types, parsing, and serialization for vCard data
//! in all three versions in use.
//!
//! ## Overview
//!
//! A card is read into a [`VCard`] whatever its version and can be written
//! back in any version. Values that a target version cannot express are
//! rewritten or left out by the serializer.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:2.1\r\n\
//! N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:M=C3=BCller;J=C3=BCrgen\r\n\
//! TEL;HOME;VOICE:+49 30 1234567\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse(input).unwrap();
//! assert_eq!(cards[0].names[0].value().surnames(), ["Müller"]);
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::core::{TextProperty, VCard, VCardVersion, VcfOptions};
//! use vcardkit_rfc::rfc::vcard::serialize;
//!
//! let mut card = VCard::new();
//! card.formatted_names.push(TextProperty::new("Jane Doe"));
//! card.emails.push(TextProperty::new("jane@example.com"));
//!
//! let output = serialize(&[card], VCardVersion::V4_0, VcfOptions::default());
//! assert!(output.contains("FN:Jane Doe"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Data model (`VCard`, values, parameters, properties)
//! - [`parse`] - Parsing functions and error types
//! - [`build`] - Serialization functions
//! - [`encoding`] - Quoted-printable, base64 and charsets
//! - [`reference`] - Embedded relation cards vs. UID references

pub mod build;
pub mod core;
pub mod encoding;
pub mod parse;
pub mod reference;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{serialize, serialize_single};
pub use core::{
    Address, ContactId, DataValue, DateAndOrTime, Gender, Name, Organization, Relation, VCard,
    VCardKind, VCardParameter, VCardVersion, VcfOptions,
};
pub use parse::{ParseError, ParseResult, parse, parse_single};
pub use reference::{dereference, reference};
