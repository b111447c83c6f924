//! Application layer managing the controller and its deferred work.
//!
//! This module coordinates between the domain layer and presentation layer:
//! it owns the navigation engine and toast lifecycle for one session and
//! drives toast expiry from the event loop.

pub mod scheduler;
pub mod state;
pub mod toasts;

pub use scheduler::*;
pub use state::*;
pub use toasts::*;
