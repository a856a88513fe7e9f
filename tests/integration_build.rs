//! End-to-end tests for the bookmake binary.
//!
//! These tests scaffold a minimal book project in a temporary directory and
//! drive the real binary with `assert_cmd`. External tools (Inkscape,
//! pdflatex) are best-effort collaborators of the build, so the assertions
//! below hold whether or not they are installed: tool trouble is logged and
//! the build carries on.

use assert_cmd::Command;
use image::{GenericImageView, Rgba, RgbaImage};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Lays out the expected project structure with one 400x200 raster asset.
fn scaffold_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir_all(root.join("cover")).unwrap();
    fs::write(root.join("cover/cover.svg"), "<svg xmlns=\"http://www.w3.org/2000/svg\"/>")
        .unwrap();
    fs::create_dir_all(root.join("illu/img")).unwrap();
    fs::create_dir_all(root.join("illu/d")).unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/book.tex"), "\\documentclass{book}").unwrap();

    RgbaImage::from_pixel(400, 200, Rgba([40, 80, 120, 255]))
        .save(root.join("illu/img/a.png"))
        .unwrap();

    temp
}

fn bookmake(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bookmake").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_invalid_mode_fails_without_touching_artifacts() {
    let temp = scaffold_project();

    bookmake(temp.path())
        .arg("production")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mode must be either 'debug' or 'release'"));

    assert!(!temp.path().join("out").exists());
}

#[test]
fn test_debug_build_produces_downscaled_preview() {
    let temp = scaffold_project();

    bookmake(temp.path()).assert().success();

    let artifact = temp.path().join("out/debug/illu/img/a.png");
    assert!(artifact.exists(), "expected {artifact:?} to be written");

    let img = image::open(&artifact).unwrap();
    assert_eq!(img.dimensions(), (100, 50));
}

#[test]
fn test_second_run_is_incremental() {
    let temp = scaffold_project();

    bookmake(temp.path()).assert().success();

    let artifact = temp.path().join("out/debug/illu/img/a.png");
    let first_mtime = fs::metadata(&artifact).unwrap().modified().unwrap();

    // No source changed, so the second run must not rewrite the artifact
    // and must not announce any scaling work.
    bookmake(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scale:").not());

    assert_eq!(fs::metadata(&artifact).unwrap().modified().unwrap(), first_mtime);
}

#[test]
fn test_force_argument_rebuilds_everything() {
    let temp = scaffold_project();

    bookmake(temp.path()).assert().success();

    bookmake(temp.path())
        .args(["debug", "force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scale:"));
}

#[test]
fn test_release_build_copies_raster_bytes() {
    let temp = scaffold_project();

    bookmake(temp.path()).arg("release").assert().success();

    let src = temp.path().join("illu/img/a.png");
    let artifact = temp.path().join("out/release/illu/img/a.png");
    assert_eq!(fs::read(&src).unwrap(), fs::read(&artifact).unwrap());
}

#[test]
fn test_modes_build_into_separate_roots() {
    let temp = scaffold_project();

    bookmake(temp.path()).arg("debug").assert().success();
    bookmake(temp.path()).arg("release").assert().success();

    assert!(temp.path().join("out/debug/illu/img/a.png").exists());
    assert!(temp.path().join("out/release/illu/img/a.png").exists());
}

#[test]
fn test_nested_asset_directory_aborts_with_non_zero_exit() {
    let temp = scaffold_project();
    fs::create_dir_all(temp.path().join("illu/img/nested")).unwrap();

    bookmake(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("subdirectories in 'illu/img' are not supported"));
}

#[test]
fn test_corrupt_raster_is_skipped_not_fatal() {
    let temp = scaffold_project();
    fs::write(temp.path().join("illu/img/broken.png"), b"definitely not a png").unwrap();

    // The corrupt asset produces a warning; the valid one is still built.
    bookmake(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("broken.png"));

    assert!(temp.path().join("out/debug/illu/img/a.png").exists());
    assert!(!temp.path().join("out/debug/illu/img/broken.png").exists());
}
