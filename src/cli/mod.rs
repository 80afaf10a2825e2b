//! Command-line interface module
pub mod args;
