//! Custom widgets for the TUI.

pub mod fancy;
pub mod tree;

pub use fancy::{FancyText, Font};
pub use tree::TreeList;
