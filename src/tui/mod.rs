//! Terminal User Interface module
//!
//! This module provides the interactive onboarding wizard using ratatui:
//! three preference sections rendered as selectable cards, a progress bar,
//! and a submit-gated Next button.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
