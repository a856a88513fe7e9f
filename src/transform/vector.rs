//! Inkscape-backed transforms for vector drawings.
//!
//! Two strategies share one invocation path: [`DrawingTransform`] exports a
//! drawing to PNG at the mode's DPI, and [`CoverTransform`] exports the book
//! cover to a print-ready PDF with text converted to paths so the
//! distributed PDF carries no font dependencies. Tool failures are
//! best-effort: they come back as a [`TransformStatus`], never as an error.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::freshness::Freshness;
use crate::tools::{ToolCommand, ToolOutcome};
use crate::transform::{AssetTransform, TransformStatus};
use crate::utils::fs::ensure_parent_dir;

/// SVG to PNG render for the drawing folder.
pub struct DrawingTransform<'a> {
    config: &'a BuildConfig,
    inkscape: Option<&'a Path>,
    freshness: Freshness,
}

impl<'a> DrawingTransform<'a> {
    /// Create the transform with the resolved Inkscape binding (or `None`
    /// when discovery found nothing).
    #[must_use]
    pub fn new(config: &'a BuildConfig, inkscape: Option<&'a Path>) -> Self {
        Self {
            config,
            inkscape,
            freshness: Freshness::new(config.force),
        }
    }
}

impl AssetTransform for DrawingTransform<'_> {
    fn artifact_path(&self, dst: &Path) -> PathBuf {
        dst.with_extension("png")
    }

    fn apply(&self, src: &Path, dst: &Path) -> Result<TransformStatus> {
        let artifact = self.artifact_path(dst);
        if !self.freshness.needs_rebuild(src, &artifact) {
            return Ok(TransformStatus::Fresh);
        }

        render(self.inkscape, src, &artifact, self.config.mode.export_dpi(), &[])
    }
}

/// SVG to print-ready PDF render for the cover.
pub struct CoverTransform<'a> {
    config: &'a BuildConfig,
    inkscape: Option<&'a Path>,
    freshness: Freshness,
}

impl<'a> CoverTransform<'a> {
    /// Create the transform with the resolved Inkscape binding.
    #[must_use]
    pub fn new(config: &'a BuildConfig, inkscape: Option<&'a Path>) -> Self {
        Self {
            config,
            inkscape,
            freshness: Freshness::new(config.force),
        }
    }
}

impl AssetTransform for CoverTransform<'_> {
    fn apply(&self, src: &Path, dst: &Path) -> Result<TransformStatus> {
        if !self.freshness.needs_rebuild(src, dst) {
            return Ok(TransformStatus::Fresh);
        }

        render(
            self.inkscape,
            src,
            dst,
            self.config.mode.export_dpi(),
            &["--export-type=pdf", "--export-text-to-path"],
        )
    }
}

/// Shared Inkscape invocation for both vector strategies.
fn render(
    inkscape: Option<&Path>,
    src: &Path,
    artifact: &Path,
    dpi: u32,
    extra_args: &[&str],
) -> Result<TransformStatus> {
    let Some(bin) = inkscape else {
        return Ok(TransformStatus::ToolNotFound);
    };

    ensure_parent_dir(artifact)?;

    let command = ToolCommand::new(bin)
        .arg(format!("--export-filename={}", artifact.display()))
        .arg(format!("--export-dpi={dpi}"))
        .args(extra_args)
        .arg(src)
        .with_context("rendering vector drawing");

    println!("{}", command.render().dimmed());

    match command.execute()? {
        ToolOutcome::Success { .. } => Ok(TransformStatus::Rebuilt),
        ToolOutcome::NotFound => Ok(TransformStatus::ToolNotFound),
        ToolOutcome::Failed { code, output } => Ok(TransformStatus::ToolFailed { code, output }),
    }
}
