//! Error handling for bookmake
//!
//! The error system is built around two types:
//! - [`BookmakeError`] - strongly-typed error variants for every failure mode
//!   the build pipeline can hit
//! - [`ErrorContext`] - a wrapper that adds a user-friendly suggestion and
//!   optional details for terminal display
//!
//! # Error Categories
//!
//! - **Configuration**: [`BookmakeError::InvalidMode`] - the mode argument was
//!   neither `debug` nor `release`
//! - **Asset layout**: [`BookmakeError::NestedDirectory`],
//!   [`BookmakeError::SourceNotRegular`] - the asset folders violated the
//!   flat-layout contract
//! - **File system**: [`BookmakeError::FileSystemError`],
//!   [`BookmakeError::IoError`] - I/O failures with operation context
//! - **Raster assets**: [`BookmakeError::ImageError`] - decode/encode failures
//!   from the `image` crate
//!
//! Fatal errors abort the build; the CLI converts them through
//! [`user_friendly_error`] into colored output with actionable suggestions.
//! External tool failures (Inkscape, pdflatex) are deliberately *not* errors:
//! they are modeled as [`crate::tools::ToolOutcome`] values so the
//! orchestrator can log them and keep going.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for bookmake operations.
///
/// Each variant represents a specific failure mode and carries enough context
/// (paths, operation names) to produce an actionable message. Variants map
/// one-to-one onto the fatal error taxonomy of the build: anything that is
/// merely "best effort" (an external tool exiting non-zero) never becomes a
/// `BookmakeError`.
#[derive(Error, Debug)]
pub enum BookmakeError {
    /// The mode argument was not one of the two supported build modes.
    #[error("mode must be either 'debug' or 'release', got '{mode}'")]
    InvalidMode {
        /// The rejected mode string as the user typed it.
        mode: String,
    },

    /// An asset folder contained a subdirectory. Asset folders are flat by
    /// design; this aborts the whole build before any further entry is
    /// processed.
    #[error("subdirectories in '{folder}' are not supported")]
    NestedDirectory {
        /// The asset folder containing the offending entry.
        folder: String,
    },

    /// A copy source was missing or not a regular file.
    #[error("'{path}' is not a regular file")]
    SourceNotRegular {
        /// The offending source path.
        path: String,
    },

    /// A file system operation failed with context about what was attempted.
    #[error("file system error: {operation} for {path}")]
    FileSystemError {
        /// What was being attempted (e.g. "create output directory").
        operation: String,
        /// The path involved.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A raster asset could not be decoded, resized, or re-encoded.
    #[error("image operation failed for {path}")]
    ImageError {
        /// The raster asset being processed.
        path: String,
        /// The underlying error from the `image` crate.
        #[source]
        source: image::ImageError,
    },

    /// Generic I/O error without richer context.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catch-all for errors that don't fit other categories.
    #[error("{message}")]
    Other {
        /// The error description.
        message: String,
    },
}

/// Error with user-friendly context for terminal display.
///
/// Wraps a [`BookmakeError`] with an optional suggestion (what the user can
/// do about it) and optional details (why it happened). [`display`] renders
/// the three parts to stderr in red/yellow/green respectively.
///
/// [`display`]: ErrorContext::display
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error.
    pub error: BookmakeError,
    /// Optional suggestion for resolving the error.
    pub suggestion: Option<String>,
    /// Optional additional details about the error.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: BookmakeError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining why the error occurred.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    ///
    /// Error message in red and bold, details in yellow, suggestion in green.
    /// This is the primary way bookmake presents fatal errors to users.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Downcasts to [`BookmakeError`] and [`std::io::Error`] to attach per-kind
/// suggestions; anything else falls back to a generic message that includes
/// the full anyhow error chain for diagnostics.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let error = match error.downcast::<BookmakeError>() {
        Ok(typed) => return create_error_context(typed),
        Err(other) => other,
    };

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(BookmakeError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                    source: std::io::Error::new(io_error.kind(), io_error.to_string()),
                })
                .with_suggestion("Check file ownership or re-run with elevated permissions")
                .with_details(
                    "bookmake could not read an asset or write into the output directory",
                );
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(BookmakeError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                    source: std::io::Error::new(io_error.kind(), io_error.to_string()),
                })
                .with_suggestion("Check that the expected project layout exists (cover/, illu/img/, illu/d/, src/book.tex)")
                .with_details("A required file or directory could not be found");
            }
            _ => {}
        }
    }

    // Generic error - include the full chain for better diagnostics.
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(BookmakeError::Other { message })
}

/// Attach the standard suggestion and details for a typed error.
fn create_error_context(error: BookmakeError) -> ErrorContext {
    let (suggestion, details) = match &error {
        BookmakeError::InvalidMode { .. } => (
            Some("Run 'bookmake debug' or 'bookmake release'".to_string()),
            Some(
                "The build mode selects output resolution and the out/<mode> directory"
                    .to_string(),
            ),
        ),
        BookmakeError::NestedDirectory { folder } => (
            Some("Move the nested files up into the asset folder itself".to_string()),
            Some(format!(
                "bookmake expects a flat list of assets in '{folder}'; nested folders would break the mirrored output layout"
            )),
        ),
        BookmakeError::SourceNotRegular { .. } => (
            Some("Only regular files can be copied into the output tree".to_string()),
            None,
        ),
        BookmakeError::FileSystemError { .. } => {
            (Some("Check permissions and available disk space".to_string()), None)
        }
        BookmakeError::ImageError { .. } => {
            (Some("Check that the file is a valid PNG or JPEG image".to_string()), None)
        }
        _ => (None, None),
    };

    let mut ctx = ErrorContext::new(error);
    ctx.suggestion = suggestion;
    ctx.details = details;
    ctx
}
