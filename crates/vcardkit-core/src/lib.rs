//! Shared configuration, constants and errors for the vcardkit workspace.

pub mod config;
pub mod constants;
pub mod error;
