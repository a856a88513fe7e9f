//! Type-safe builder for external tool invocations.
//!
//! Provides a small fluent API for constructing and executing subprocess
//! calls with consistent error handling. Execution is blocking: each
//! invocation waits for the subprocess to exit and captures its combined
//! stdout and stderr, matching the sequential, interactive usage pattern of
//! the build.

use anyhow::{Context, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Outcome of one external tool invocation.
///
/// Tool trouble is data, not an error: the orchestrator treats `NotFound`
/// and `Failed` as logged-and-continue while real I/O problems still
/// propagate as `Err` from [`ToolCommand::execute`].
#[derive(Debug)]
pub enum ToolOutcome {
    /// The tool ran and exited successfully.
    Success {
        /// Combined stdout and stderr of the subprocess.
        output: String,
    },
    /// The binary could not be found or started.
    NotFound,
    /// The tool ran but exited non-zero.
    Failed {
        /// Exit code, when the process exited normally.
        code: Option<i32>,
        /// Combined stdout and stderr of the subprocess.
        output: String,
    },
}

impl ToolOutcome {
    /// Whether the invocation completed successfully.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Fluent builder for one subprocess invocation.
///
/// # Examples
///
/// ```rust,ignore
/// let outcome = ToolCommand::new("pdflatex")
///     .arg("-output-directory")
///     .arg("out")
///     .current_dir(&project_root)
///     .with_context("typesetting the book")
///     .execute()?;
/// ```
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
    context: Option<String>,
}

impl ToolCommand {
    /// Create a builder for the given program (a bare name resolved via PATH
    /// or an absolute path from the locator).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            context: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Set the working directory for the subprocess.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Attach a description used to enhance error messages.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// The command line as it will be echoed to the user.
    #[must_use]
    pub fn render(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }

    /// Run the command to completion, capturing combined output.
    ///
    /// A spawn failure of kind [`std::io::ErrorKind::NotFound`] becomes
    /// [`ToolOutcome::NotFound`]; any other spawn failure is a real error.
    ///
    /// # Errors
    /// Returns an error if the subprocess could not be executed for reasons
    /// other than the binary being absent.
    pub fn execute(self) -> Result<ToolOutcome> {
        tracing::debug!("executing: {}", self.render());

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let output = match command.output() {
            Ok(output) => output,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("{} not found", self.program.display());
                return Ok(ToolOutcome::NotFound);
            }
            Err(err) => {
                let context = self
                    .context
                    .unwrap_or_else(|| format!("running {}", self.program.display()));
                return Err(err).with_context(|| format!("Failed while {context}"));
            }
        };

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(ToolOutcome::Success { output: combined })
        } else {
            Ok(ToolOutcome::Failed {
                code: output.status.code(),
                output: combined,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_maps_to_not_found() {
        let outcome = ToolCommand::new("bookmake-no-such-tool-xyz").execute().unwrap();
        assert!(matches!(outcome, ToolOutcome::NotFound));
    }

    #[test]
    fn test_render_echoes_full_command_line() {
        let cmd = ToolCommand::new("inkscape")
            .arg("--export-dpi=300")
            .arg("cover.svg");
        assert_eq!(cmd.render(), "inkscape --export-dpi=300 cover.svg");
    }

    #[cfg(unix)]
    #[test]
    fn test_success_captures_output() {
        let outcome = ToolCommand::new("sh")
            .args(["-c", "echo out; echo err >&2"])
            .execute()
            .unwrap();
        match outcome {
            ToolOutcome::Success { output } => {
                assert!(output.contains("out"));
                assert!(output.contains("err"));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_maps_to_failed() {
        let outcome = ToolCommand::new("sh")
            .args(["-c", "echo broken; exit 3"])
            .execute()
            .unwrap();
        match outcome {
            ToolOutcome::Failed { code, output } => {
                assert_eq!(code, Some(3));
                assert!(output.contains("broken"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
