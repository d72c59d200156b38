//! Library side of the `vcardkit` binary: arguments, file loading and conversion.

pub mod cli;
pub mod convert;
