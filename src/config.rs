//! Immutable build configuration.
//!
//! All mode- and flag-dependent behavior flows from a single [`BuildConfig`]
//! constructed once at startup and passed by reference into every component.
//! No component reads ambient global state; this makes the transforms and the
//! walker trivially testable against temporary directories.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::BookmakeError;

/// The two supported build modes.
///
/// Debug trades visual fidelity for fast, small, quickly-regenerated
/// previews; release requires full fidelity. The mode selects the export DPI
/// for vector renders, the copy-vs-downscale policy for raster assets, and
/// the `out/<mode>` output root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Low-resolution previews for fast iteration.
    Debug,
    /// Full-fidelity output for print.
    Release,
}

impl BuildMode {
    /// The mode name as it appears on the command line and in `out/<mode>`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    /// Export DPI passed to Inkscape for vector renders in this mode.
    #[must_use]
    pub const fn export_dpi(self) -> u32 {
        match self {
            Self::Debug => 100,
            Self::Release => 300,
        }
    }
}

impl FromStr for BuildMode {
    type Err = BookmakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            other => Err(BookmakeError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable configuration for one build run.
///
/// Constructed once by the CLI and never mutated afterwards. Paths inside the
/// project are always derived from [`project_root`], so tests can point a
/// config at a temporary directory without touching the process working
/// directory.
///
/// [`project_root`]: BuildConfig::project_root
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Selected build mode.
    pub mode: BuildMode,
    /// When set, every artifact is treated as unconditionally stale.
    pub force: bool,
    /// Root of the book project (normally the current working directory).
    pub project_root: PathBuf,
}

impl BuildConfig {
    /// Create a configuration rooted at `project_root`.
    #[must_use]
    pub fn new(mode: BuildMode, force: bool, project_root: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            force,
            project_root: project_root.into(),
        }
    }

    /// Mode-specific output root: `<project_root>/out/<mode>`.
    ///
    /// Artifact paths mirror their asset paths under this root, so an
    /// artifact's location is a deterministic function of (asset path, mode).
    #[must_use]
    pub fn output_root(&self) -> PathBuf {
        self.project_root.join("out").join(self.mode.as_str())
    }

    /// The `\base` macro value handed to pdflatex: `out/<mode>`.
    ///
    /// Relative on purpose - pdflatex runs with the project root as its
    /// working directory, and the book sources reference `\base/...` paths.
    #[must_use]
    pub fn base_macro(&self) -> String {
        format!("out/{}", self.mode.as_str())
    }

    /// Absolute path of an asset inside the project.
    #[must_use]
    pub fn asset_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.project_root.join(relative)
    }
}
