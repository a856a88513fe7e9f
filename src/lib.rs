//! bookmake - asset build pipeline for book projects
//!
//! bookmake converts the source assets of a book project (raster images and
//! SVG drawings) into build-ready artifacts under a mode-specific output
//! root, then invokes pdflatex to typeset the final document. Regeneration
//! is incremental: a per-asset freshness oracle compares modification
//! timestamps and skips anything already up to date.
//!
//! # Architecture Overview
//!
//! - `out/<mode>/` mirrors the asset folders; artifact paths are a
//!   deterministic function of (asset path, build mode)
//! - two build modes select the quality/speed tradeoff: `debug` renders
//!   low-DPI previews and 100px-wide raster thumbnails, `release` copies
//!   rasters untouched and renders vectors at print DPI
//! - external tools (Inkscape, pdflatex) are best-effort collaborators:
//!   their failures are logged and the build continues
//!
//! # Core Modules
//!
//! - [`config`] - the immutable [`config::BuildConfig`] constructed once at
//!   startup and passed into every component
//! - [`freshness`] - the staleness predicate deciding what to regenerate
//! - [`transform`] - per-asset-class strategies (copy-or-downscale, SVG to
//!   PNG, SVG to print PDF)
//! - [`walker`] - flat-folder enumeration mapping assets to mirrored
//!   artifact paths
//! - [`tools`] - external tool discovery and blocking subprocess execution
//! - [`pipeline`] - top-level sequencing of one build run
//!
//! # Supporting Modules
//!
//! - [`cli`] - command-line parsing and logging setup
//! - [`core`] - error taxonomy and user-facing error reporting
//! - [`constants`] - the fixed project layout contract
//! - [`utils`] - small file system helpers
//!
//! # Command-Line Usage
//!
//! ```bash
//! bookmake                 # incremental debug build
//! bookmake release         # full-fidelity build for print
//! bookmake debug force     # rebuild everything from scratch
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod freshness;
pub mod pipeline;
pub mod tools;
pub mod transform;
pub mod utils;
pub mod walker;
