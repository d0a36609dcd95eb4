//! Display formatting for plain-terminal output
//!
//! Formats the preference catalog for non-TUI commands.

pub mod options;
