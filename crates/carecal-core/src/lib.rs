//! Shared building blocks for the care calendar: settings, error types,
//! identifier newtypes and engine constants.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
