//! Command handlers
//!
//! The work behind each CLI command, kept separate from argument parsing
//! so it can be called and tested directly.

pub mod render;
