//! External tool plumbing: command execution and binary discovery.
//!
//! The build shells out to two external tools - Inkscape for vector renders
//! and pdflatex for typesetting. Both are invoked through [`ToolCommand`],
//! which executes synchronously, captures combined stdout+stderr, and maps
//! the result into an explicit [`ToolOutcome`] so callers can decide per
//! kind whether to continue or abort instead of relying on print-and-fall-
//! through.

pub mod command;
pub mod locate;

pub use command::{ToolCommand, ToolOutcome};
pub use locate::{DiscoveryStrategy, ToolLocator};
