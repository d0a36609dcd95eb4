//! Storytime - Terminal-based companion for a children's story service
//!
//! This library provides the core functionality for the Storytime terminal
//! application. The current milestone covers the onboarding flow: a
//! preference-selection wizard (age range, story styles, reading voice)
//! rendered as an interactive TUI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Static preference option catalog
//! - `wizard`: Wizard selection state and progress logic
//! - `display`: Plain-terminal output formatting
//! - `tui`: Interactive terminal interface

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod tui;
pub mod wizard;

pub use error::StorytimeError;
