//! vCard test fixtures and parse/serialize tests across the three versions.

mod fixtures;
mod round_trip;
