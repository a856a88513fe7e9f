//! Small cross-cutting utilities.

pub mod fs;
