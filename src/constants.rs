//! Global constants for the expected project layout.
//!
//! bookmake operates on a fixed book-project layout rather than a
//! configurable manifest. Defining the paths centrally keeps the layout
//! contract in one place and makes the magic strings discoverable.

/// Source file for the book cover, rendered to a print-ready PDF.
pub const COVER_SOURCE: &str = "cover/cover.svg";

/// Cover artifact path, relative to the mode-specific output root.
pub const COVER_ARTIFACT: &str = "illu/cover.pdf";

/// Flat folder of raster assets (PNG/JPEG), copied or downscaled per mode.
pub const IMAGE_FOLDER: &str = "illu/img";

/// Flat folder of vector drawings (SVG), rendered to PNG per mode.
pub const DRAWING_FOLDER: &str = "illu/d";

/// Entry point handed to pdflatex.
pub const TYPESET_ENTRY: &str = "src/book.tex";

/// Directory pdflatex writes its own output into (independent of mode).
pub const TYPESET_OUTPUT_DIR: &str = "out";

/// Target width in pixels for debug-mode raster previews. Height follows
/// from the source aspect ratio with integer floor division.
pub const PREVIEW_WIDTH: u32 = 100;

/// Candidate install locations probed for the Inkscape binary, in order.
/// The PATH lookup and the `INKSCAPE` environment override come on top of
/// these; see [`crate::tools::locate`].
pub const INKSCAPE_CANDIDATES: &[&str] = &[
    "/Applications/Inkscape.app/Contents/MacOS/inkscape",
    "/usr/bin/inkscape",
    "/snap/bin/inkscape",
];

/// Environment variable that overrides Inkscape discovery entirely.
pub const INKSCAPE_ENV_VAR: &str = "INKSCAPE";
