//! TUI Dialogs module

pub mod help;
