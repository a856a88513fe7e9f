//! Command-line interface for bookmake.
//!
//! The surface is intentionally tiny - one positional mode argument and an
//! optional force argument:
//!
//! ```bash
//! bookmake                 # debug build (default)
//! bookmake release         # full-fidelity build
//! bookmake debug force     # any second argument forces a full rebuild
//! ```
//!
//! The presence of *any* second positional argument enables the force flag;
//! only presence counts, not the value. Verbosity is controlled with
//! `-v`/`-q`, and `RUST_LOG` overrides both.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{BuildConfig, BuildMode};
use crate::pipeline::BuildPipeline;

/// Main CLI structure for bookmake.
#[derive(Parser)]
#[command(
    name = "bookmake",
    about = "Build pipeline for book projects - prepares assets and typesets the final PDF",
    version,
    long_about = "bookmake converts the source image and vector-drawing assets of a book \
                  project into build-ready artifacts under out/<mode>/, then invokes pdflatex \
                  to produce the final document."
)]
pub struct Cli {
    /// Build mode: 'debug' (fast, low-resolution previews) or 'release'
    /// (full fidelity).
    #[arg(value_name = "MODE")]
    mode: Option<String>,

    /// Force a full rebuild. The presence of any value here treats every
    /// artifact as stale.
    #[arg(value_name = "FORCE")]
    force: Option<String>,

    /// Enable verbose output for debugging.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Execute the build described by the parsed arguments.
    ///
    /// # Errors
    /// Returns an error for an invalid mode (before any artifact is
    /// touched) or any fatal build condition; see
    /// [`BuildPipeline::run`].
    pub fn execute(self) -> Result<()> {
        self.init_logging();

        let mode: BuildMode = self.mode.as_deref().unwrap_or("debug").parse()?;
        let force = self.force.is_some();

        let project_root = std::env::current_dir()?;
        let config = BuildConfig::new(mode, force, project_root);
        tracing::debug!(mode = %config.mode, force = config.force, "starting build");

        BuildPipeline::new(config).run()
    }

    /// Set up tracing with the env-filter; `RUST_LOG` wins over the flags.
    fn init_logging(&self) {
        let default_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        };

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .try_init();
    }
}
