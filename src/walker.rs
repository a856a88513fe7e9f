//! Directory walker: applies a transform to every asset in a flat folder.
//!
//! The walker mirrors the asset folder under the mode-specific output root
//! and hands each file to the given transform. Asset folders are flat by
//! design - a nested subdirectory aborts the whole build, a deliberate
//! simplicity constraint rather than an oversight. Per-asset
//! failures (a corrupt image, an unreadable file) are logged and skipped so
//! one bad asset cannot take down the run, and external-tool trouble is
//! logged per invocation.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::config::BuildConfig;
use crate::core::BookmakeError;
use crate::transform::{AssetTransform, TransformStatus};
use crate::utils::fs::ensure_dir;

/// Processes every file in `folder` (relative to the project root) with the
/// given transform, writing artifacts to the mirrored path under the output
/// root.
///
/// Processing order is whatever order the filesystem enumeration yields;
/// each asset's transform is independent of every other asset's.
///
/// # Errors
/// Returns an error if the output directory cannot be created, the folder
/// cannot be read, or the folder contains a nested subdirectory.
pub fn process_folder(
    config: &BuildConfig,
    folder: &str,
    transform: &dyn AssetTransform,
) -> Result<()> {
    let src_dir = config.asset_path(folder);
    let out_dir = config.output_root().join(folder);
    ensure_dir(&out_dir)?;

    let entries = fs::read_dir(&src_dir)
        .with_context(|| format!("Failed to read asset folder: {}", src_dir.display()))?;

    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to enumerate entries in {}", src_dir.display()))?;

        let file_type = entry.file_type().with_context(|| {
            format!("Failed to inspect entry: {}", entry.path().display())
        })?;
        if file_type.is_dir() {
            return Err(BookmakeError::NestedDirectory {
                folder: folder.to_string(),
            }
            .into());
        }

        let src = entry.path();
        let dst = out_dir.join(entry.file_name());

        match transform.apply(&src, &dst) {
            Ok(status) => report_status(&src, &status),
            Err(err) => {
                // One bad asset must not abort the whole run.
                tracing::warn!("transform failed for {}: {err:#}", src.display());
                eprintln!(
                    "{}: skipping {}: {err:#}",
                    "warning".yellow().bold(),
                    src.display()
                );
            }
        }
    }

    Ok(())
}

/// Logs the outcome of one transform application.
pub fn report_status(src: &Path, status: &TransformStatus) {
    match status {
        TransformStatus::Fresh => {
            tracing::debug!("{} is up to date", src.display());
        }
        TransformStatus::Rebuilt => {
            tracing::debug!("{} rebuilt", src.display());
        }
        TransformStatus::ToolNotFound => {
            eprintln!(
                "{}: no vector-rendering tool available, skipping {}",
                "warning".yellow().bold(),
                src.display()
            );
        }
        TransformStatus::ToolFailed { code, output } => {
            eprintln!(
                "{}: tool exited with {:?} for {}\n{}",
                "warning".yellow().bold(),
                code,
                src.display(),
                output.trim_end()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildMode;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// Transform that records the (src, dst) pairs it was asked to handle.
    struct Recorder {
        calls: RefCell<Vec<(PathBuf, PathBuf)>>,
        fail_on: Option<String>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on: None,
            }
        }
    }

    impl AssetTransform for Recorder {
        fn apply(&self, src: &Path, dst: &Path) -> Result<TransformStatus> {
            if let Some(name) = &self.fail_on {
                if src.file_name().is_some_and(|f| f == name.as_str()) {
                    anyhow::bail!("simulated per-asset failure");
                }
            }
            self.calls.borrow_mut().push((src.to_path_buf(), dst.to_path_buf()));
            Ok(TransformStatus::Rebuilt)
        }
    }

    fn setup(mode: BuildMode) -> (tempfile::TempDir, BuildConfig) {
        let temp = tempdir().unwrap();
        let config = BuildConfig::new(mode, false, temp.path());
        (temp, config)
    }

    #[test]
    fn test_walker_mirrors_folder_under_output_root() {
        let (temp, config) = setup(BuildMode::Debug);
        let folder = temp.path().join("illu/img");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("a.png"), b"x").unwrap();
        fs::write(folder.join("b.jpg"), b"y").unwrap();

        let recorder = Recorder::new();
        process_folder(&config, "illu/img", &recorder).unwrap();

        assert!(temp.path().join("out/debug/illu/img").is_dir());

        let mut dsts: Vec<_> = recorder
            .calls
            .into_inner()
            .into_iter()
            .map(|(_, dst)| dst)
            .collect();
        dsts.sort();
        assert_eq!(
            dsts,
            vec![
                temp.path().join("out/debug/illu/img/a.png"),
                temp.path().join("out/debug/illu/img/b.jpg"),
            ]
        );
    }

    #[test]
    fn test_nested_subdirectory_aborts_the_build() {
        let (temp, config) = setup(BuildMode::Debug);
        let folder = temp.path().join("illu/img");
        fs::create_dir_all(folder.join("nested")).unwrap();

        let recorder = Recorder::new();
        let err = process_folder(&config, "illu/img", &recorder).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BookmakeError>(),
            Some(BookmakeError::NestedDirectory { folder }) if folder == "illu/img"
        ));
    }

    #[test]
    fn test_per_asset_failure_does_not_abort_the_walk() {
        let (temp, config) = setup(BuildMode::Debug);
        let folder = temp.path().join("illu/img");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("bad.png"), b"x").unwrap();
        fs::write(folder.join("good.png"), b"y").unwrap();

        let recorder = Recorder {
            fail_on: Some("bad.png".to_string()),
            ..Recorder::new()
        };
        process_folder(&config, "illu/img", &recorder).unwrap();

        let calls = recorder.calls.into_inner();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.ends_with("good.png"));
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let (_temp, config) = setup(BuildMode::Debug);
        let recorder = Recorder::new();
        assert!(process_folder(&config, "illu/img", &recorder).is_err());
    }
}
