//! vCard serialization (2.1, 3.0, RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::build::serialize;
//! use vcardkit_rfc::rfc::vcard::core::{TextProperty, VCard, VCardVersion, VcfOptions};
//!
//! let mut card = VCard::new();
//! card.formatted_names.push(TextProperty::new("John Doe"));
//! card.emails.push(TextProperty::new("john@example.com"));
//!
//! let output = serialize(&[card], VCardVersion::V3_0, VcfOptions::default());
//! assert!(output.contains("FN:John Doe\r\n"));
//! ```
//!
//! ## Features
//!
//! - Line folding at 75 octets (UTF-8 safe), soft breaks for quoted-printable
//! - Text masking per version
//! - RFC 6868 caret encoding for 4.0 parameters
//! - Embedded AGENT cards (2.1 nested, 3.0 masked, 4.0 by reference)

mod datetime;
mod escape;
mod fold;
mod serializer;


pub use datetime::{append_date, append_time, append_timestamp, append_utc_offset};
pub use escape::{append_escaped, append_param_value, escape_param_value, escape_text};
pub use fold::{fold_line, fold_quoted_printable};
pub use serializer::{VcfSerializer, serialize, serialize_single};
