//! Core data models for Storytime
//!
//! This module contains the static preference catalog presented during
//! onboarding: age ranges, story styles, and reading voices.

pub mod preferences;

pub use preferences::{
    IconKind, PreferenceKind, PreferenceOption, AGE_RANGES, STORY_STYLES, VOICE_STYLES,
};
