//! Asset transform strategies.
//!
//! A transform turns one source asset into one derived artifact. Three
//! strategies exist: [`raster::RasterTransform`] (copy-or-downscale),
//! [`vector::DrawingTransform`] (SVG to PNG) and [`vector::CoverTransform`]
//! (SVG to print-ready PDF). Each strategy is idempotent, independently
//! invokable, and consults the freshness oracle before doing any work.

use anyhow::Result;
use std::path::{Path, PathBuf};

pub mod raster;
pub mod vector;

pub use raster::RasterTransform;
pub use vector::{CoverTransform, DrawingTransform};

/// Result of applying a transform to one asset.
///
/// Tool trouble is carried as data so the caller can decide per kind whether
/// to continue or abort; only genuine I/O or decode failures surface as
/// `Err` from [`AssetTransform::apply`].
#[derive(Debug)]
pub enum TransformStatus {
    /// The artifact was already up to date; no work was performed.
    Fresh,
    /// The artifact was (re)generated.
    Rebuilt,
    /// The external tool required by this transform is not installed.
    ToolNotFound,
    /// The external tool ran but exited non-zero.
    ToolFailed {
        /// Exit code, when the process exited normally.
        code: Option<i32>,
        /// Captured combined output of the tool.
        output: String,
    },
}

/// A per-asset-class transform from source file to derived artifact.
pub trait AssetTransform {
    /// Maps the mirrored destination path to the actual artifact path.
    ///
    /// Identity for most transforms; vector renders swap the `.svg` suffix
    /// for the export format's extension.
    fn artifact_path(&self, dst: &Path) -> PathBuf {
        dst.to_path_buf()
    }

    /// Applies the transform, regenerating the artifact if it is stale.
    ///
    /// Must return [`TransformStatus::Fresh`] without side effects when the
    /// freshness oracle reports no rebuild is needed.
    ///
    /// # Errors
    /// Returns an error on I/O or decode failures; callers treat these as
    /// per-asset recoverable (log and skip).
    fn apply(&self, src: &Path, dst: &Path) -> Result<TransformStatus>;
}
