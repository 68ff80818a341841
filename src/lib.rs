//! Orrery - A terminal explorer for star-system body hierarchies
//!
//! This crate provides functionality for:
//! - Loading star systems and the live objects of the player's system
//! - The filterable, sortable system-overview widget
//! - Formatting distances, speeds, masses, durations and coordinates
//! - Interactive TUI and plain-text/JSON rendering of the overview

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod overview;
pub mod system;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use error::{OrreryError, Result};
