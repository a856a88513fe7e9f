//! Copy-or-downscale transform for raster assets.
//!
//! Release builds need full fidelity, so the source file is copied byte for
//! byte. Debug builds trade fidelity for fast, small previews: the source is
//! decoded (PNG or JPEG, selected by file extension), downscaled to a fixed
//! preview width with nearest-neighbor sampling, and re-encoded as PNG
//! regardless of the input format.

use anyhow::Result;
use colored::Colorize;
use image::imageops::FilterType;
use image::{GenericImageView, ImageFormat};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::config::{BuildConfig, BuildMode};
use crate::constants::PREVIEW_WIDTH;
use crate::core::BookmakeError;
use crate::freshness::Freshness;
use crate::transform::{AssetTransform, TransformStatus};

/// Copy-or-downscale strategy for the raster asset folder.
pub struct RasterTransform<'a> {
    config: &'a BuildConfig,
    freshness: Freshness,
}

impl<'a> RasterTransform<'a> {
    /// Create the transform for one build run.
    #[must_use]
    pub fn new(config: &'a BuildConfig) -> Self {
        Self {
            config,
            freshness: Freshness::new(config.force),
        }
    }
}

impl AssetTransform for RasterTransform<'_> {
    fn apply(&self, src: &Path, dst: &Path) -> Result<TransformStatus> {
        if !self.freshness.needs_rebuild(src, dst) {
            return Ok(TransformStatus::Fresh);
        }

        match self.config.mode {
            BuildMode::Release => {
                println!("{} {} -> {}", "Copy:".bold(), src.display(), dst.display());
                copy_file(src, dst)?;
            }
            BuildMode::Debug => {
                println!("{} {} -> {}", "Scale:".bold(), src.display(), dst.display());
                downscale(src, dst)?;
            }
        }

        Ok(TransformStatus::Rebuilt)
    }
}

/// Byte-for-byte copy, rejecting anything that is not a regular file.
fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let meta = fs::metadata(src).map_err(|source| BookmakeError::FileSystemError {
        operation: "stat copy source".to_string(),
        path: src.display().to_string(),
        source,
    })?;

    if !meta.is_file() {
        return Err(BookmakeError::SourceNotRegular {
            path: src.display().to_string(),
        }
        .into());
    }

    fs::copy(src, dst).map_err(|source| BookmakeError::FileSystemError {
        operation: "copy raster asset".to_string(),
        path: dst.display().to_string(),
        source,
    })?;

    Ok(())
}

/// Decode, resize to the preview width, and re-encode as PNG.
fn downscale(src: &Path, dst: &Path) -> Result<()> {
    // Format is selected by extension alone: .png decodes as PNG, anything
    // else decodes as JPEG.
    let format = if src
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
    {
        ImageFormat::Png
    } else {
        ImageFormat::Jpeg
    };

    let file = File::open(src).map_err(|source| BookmakeError::FileSystemError {
        operation: "open raster asset".to_string(),
        path: src.display().to_string(),
        source,
    })?;

    let img = image::load(BufReader::new(file), format).map_err(|source| {
        BookmakeError::ImageError {
            path: src.display().to_string(),
            source,
        }
    })?;

    let (width, height) = img.dimensions();
    // Integer floor division preserves the aspect ratio; extremely wide
    // images still get one row.
    let preview_height =
        u32::try_from(u64::from(PREVIEW_WIDTH) * u64::from(height) / u64::from(width))
            .unwrap_or(u32::MAX)
            .max(1);

    let resized = img.resize_exact(PREVIEW_WIDTH, preview_height, FilterType::Nearest);

    resized
        .save_with_format(dst, ImageFormat::Png)
        .map_err(|source| BookmakeError::ImageError {
            path: dst.display().to_string(),
            source,
        })?;

    Ok(())
}
