//! Core types and error handling for bookmake.
//!
//! This module hosts the crate-wide error taxonomy and the user-facing error
//! reporting layer. Everything else in the crate funnels failures through
//! [`BookmakeError`] (directly or via [`anyhow`]), and the CLI entry point
//! converts whatever bubbles up into an [`ErrorContext`] for display.

pub mod error;

pub use error::{BookmakeError, ErrorContext, user_friendly_error};
