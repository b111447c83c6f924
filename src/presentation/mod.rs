//! Presentation layer handling terminal UI and user input.
//!
//! This module manages the terminal user interface using ratatui, maps
//! view targets to page content, and handles keyboard input.

pub mod input;
pub mod pages;
pub mod ui;

pub use input::*;
pub use pages::*;
pub use ui::*;
