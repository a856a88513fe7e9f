//! Build orchestration.
//!
//! Sequences one build run: resolve the Inkscape binding, make sure the
//! output root exists, render the cover, process the raster and drawing
//! folders, and finally hand the resolved output root to pdflatex as a
//! macro definition so the book sources can reference mode-specific asset
//! paths. Execution is strictly sequential; every external invocation blocks
//! until the subprocess exits.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::constants::{
    COVER_ARTIFACT, COVER_SOURCE, DRAWING_FOLDER, IMAGE_FOLDER, TYPESET_ENTRY, TYPESET_OUTPUT_DIR,
};
use crate::tools::{ToolCommand, ToolLocator, ToolOutcome};
use crate::transform::{AssetTransform, CoverTransform, DrawingTransform, RasterTransform};
use crate::utils::fs::ensure_dir;
use crate::walker::{process_folder, report_status};

/// One build run over the project.
///
/// The Inkscape binding is resolved once at construction and immutable for
/// the rest of the run; `None` means later vector renders will be skipped
/// with a warning rather than failing the build.
pub struct BuildPipeline {
    config: BuildConfig,
    inkscape: Option<PathBuf>,
}

impl BuildPipeline {
    /// Create a pipeline, resolving the Inkscape binding via the standard
    /// discovery strategies.
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        let inkscape = ToolLocator::inkscape().locate();
        match &inkscape {
            Some(bin) => tracing::debug!("inkscape resolved to {}", bin.display()),
            None => tracing::debug!("inkscape not found, vector renders will be skipped"),
        }
        Self { config, inkscape }
    }

    /// Create a pipeline with an explicit tool binding (for tests).
    #[must_use]
    pub fn with_tool(config: BuildConfig, inkscape: Option<PathBuf>) -> Self {
        Self { config, inkscape }
    }

    /// Run the full build: cover, images, drawings, typesetting.
    ///
    /// # Errors
    /// Returns an error on fatal conditions only: unreadable asset folders,
    /// nested subdirectories, or output directories that cannot be created.
    /// External tool failures are logged and the build continues.
    pub fn run(&self) -> Result<()> {
        println!("{}", "Building...".bold());

        ensure_dir(&self.config.output_root())?;

        self.render_cover()?;

        let raster = RasterTransform::new(&self.config);
        process_folder(&self.config, IMAGE_FOLDER, &raster)?;

        let drawings = DrawingTransform::new(&self.config, self.inkscape.as_deref());
        process_folder(&self.config, DRAWING_FOLDER, &drawings)?;

        self.typeset()
    }

    /// Renders `cover/cover.svg` into `out/<mode>/illu/cover.pdf`.
    fn render_cover(&self) -> Result<()> {
        let src = self.config.asset_path(COVER_SOURCE);
        let dst = self.config.output_root().join(COVER_ARTIFACT);

        let cover = CoverTransform::new(&self.config, self.inkscape.as_deref());
        let status = cover.apply(&src, &dst)?;
        report_status(&src, &status);
        Ok(())
    }

    /// Invokes pdflatex with the output root bound to the `\base` macro.
    fn typeset(&self) -> Result<()> {
        let job = format!(
            "\\def\\base{{{}}} \\input{{{}}}",
            self.config.base_macro(),
            TYPESET_ENTRY
        );

        let command = ToolCommand::new("pdflatex")
            .arg("-output-directory")
            .arg(TYPESET_OUTPUT_DIR)
            .arg(job)
            .current_dir(&self.config.project_root)
            .with_context("typesetting the book");

        println!("{}", command.render().dimmed());

        match command.execute()? {
            ToolOutcome::Success { .. } => {
                println!("{}", "Typesetting finished.".green());
            }
            ToolOutcome::NotFound => {
                eprintln!(
                    "{}: pdflatex not found, skipping typesetting",
                    "warning".yellow().bold()
                );
            }
            ToolOutcome::Failed { code, output } => {
                eprintln!(
                    "{}: pdflatex exited with {:?}\n{}",
                    "warning".yellow().bold(),
                    code,
                    output.trim_end()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildMode;
    use image::{GenericImageView, Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    /// Lays out a minimal book project in a temp directory.
    fn scaffold_project(root: &std::path::Path) {
        fs::create_dir_all(root.join("cover")).unwrap();
        fs::write(root.join("cover/cover.svg"), "<svg/>").unwrap();
        fs::create_dir_all(root.join("illu/img")).unwrap();
        fs::create_dir_all(root.join("illu/d")).unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/book.tex"), "\\documentclass{book}").unwrap();
    }

    #[test]
    fn test_debug_run_downscales_rasters_into_mirrored_output() {
        let temp = tempdir().unwrap();
        scaffold_project(temp.path());
        RgbaImage::from_pixel(400, 200, Rgba([5, 5, 5, 255]))
            .save(temp.path().join("illu/img/a.png"))
            .unwrap();

        let config = BuildConfig::new(BuildMode::Debug, false, temp.path());
        // No tool binding: cover render and drawings are skipped with
        // warnings, the raster folder is still processed.
        BuildPipeline::with_tool(config, None).run().unwrap();

        let artifact = temp.path().join("out/debug/illu/img/a.png");
        assert!(artifact.exists());
        let img = image::open(&artifact).unwrap();
        assert_eq!(img.dimensions(), (100, 50));
    }

    #[test]
    fn test_second_run_performs_no_transform_work() {
        let temp = tempdir().unwrap();
        scaffold_project(temp.path());
        RgbaImage::from_pixel(400, 200, Rgba([5, 5, 5, 255]))
            .save(temp.path().join("illu/img/a.png"))
            .unwrap();

        let config = BuildConfig::new(BuildMode::Debug, false, temp.path());
        let pipeline = BuildPipeline::with_tool(config, None);
        pipeline.run().unwrap();

        let artifact = temp.path().join("out/debug/illu/img/a.png");
        let first_mtime = fs::metadata(&artifact).unwrap().modified().unwrap();

        pipeline.run().unwrap();
        assert_eq!(fs::metadata(&artifact).unwrap().modified().unwrap(), first_mtime);
    }

    #[test]
    fn test_force_rewrites_fresh_artifacts() {
        let temp = tempdir().unwrap();
        scaffold_project(temp.path());
        RgbaImage::from_pixel(400, 200, Rgba([5, 5, 5, 255]))
            .save(temp.path().join("illu/img/a.png"))
            .unwrap();

        let relaxed = BuildConfig::new(BuildMode::Debug, false, temp.path());
        BuildPipeline::with_tool(relaxed, None).run().unwrap();

        let artifact = temp.path().join("out/debug/illu/img/a.png");
        // Backdate the artifact so a rewrite is observable via mtime.
        let old = std::time::SystemTime::now() - std::time::Duration::from_secs(1000);
        fs::File::options()
            .write(true)
            .open(&artifact)
            .unwrap()
            .set_times(std::fs::FileTimes::new().set_modified(old))
            .unwrap();

        let forced = BuildConfig::new(BuildMode::Debug, true, temp.path());
        BuildPipeline::with_tool(forced, None).run().unwrap();

        assert!(fs::metadata(&artifact).unwrap().modified().unwrap() > old);
    }

    #[test]
    fn test_nested_directory_is_fatal() {
        let temp = tempdir().unwrap();
        scaffold_project(temp.path());
        fs::create_dir_all(temp.path().join("illu/img/nested")).unwrap();

        let config = BuildConfig::new(BuildMode::Debug, false, temp.path());
        assert!(BuildPipeline::with_tool(config, None).run().is_err());
    }

    #[test]
    fn test_release_run_copies_rasters() {
        let temp = tempdir().unwrap();
        scaffold_project(temp.path());
        let src = temp.path().join("illu/img/photo.png");
        RgbaImage::from_pixel(32, 16, Rgba([9, 9, 9, 255])).save(&src).unwrap();

        let config = BuildConfig::new(BuildMode::Release, false, temp.path());
        BuildPipeline::with_tool(config, None).run().unwrap();

        let artifact = temp.path().join("out/release/illu/img/photo.png");
        assert_eq!(fs::read(&src).unwrap(), fs::read(&artifact).unwrap());
    }
}
