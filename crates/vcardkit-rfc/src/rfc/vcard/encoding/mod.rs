//! Transfer encodings: quoted-printable, charsets and base64.

pub mod binary;
pub mod charset;
pub mod quoted_printable;

pub use charset::decode_bytes;
