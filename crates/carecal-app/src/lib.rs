//! Command line front end for the care calendar engine.

pub mod args;
pub mod error;
pub mod input;
pub mod render;
