//! PaperDesk - navigation shell for a research-paper library
//!
//! Client-side navigation and role resolution, render dispatch, and a toast
//! lifecycle with deferred expiry, hosted in a terminal UI.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
