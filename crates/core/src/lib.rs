//! Linefold Core Library
//!
//! An incremental code folding engine for line-addressed text viewers.
//! Detection is heuristic and bounded by the viewport, so cost stays
//! proportional to what is on screen rather than to the file size.
//!
//! # Features
//!
//! - Classify files into language tags from their extension
//! - Detect bracket blocks, comment runs and function/class blocks per language
//! - Memoize detection per viewport in a bounded first-in-first-out cache
//! - Track collapsed ranges and project the buffer down to the visible lines
//! - Render projected lines as plain or ANSI text, or report as JSON/YAML
//!
//! # Example
//!
//! ```
//! use linefold_core::{FoldingEngine, Viewport};
//!
//! let lines = ["function foo() {", "  a", "  b", "  c", "  d", "}"];
//! let mut engine = FoldingEngine::default();
//! engine.load("x.js", &lines[..]);
//! engine.set_viewport(Viewport::full(lines.len()));
//!
//! let ranges = engine.foldable_ranges();
//! engine.toggle(&ranges[0].id);
//! assert_eq!(engine.visible_lines().len(), 1);
//! ```

pub mod config;
pub mod detectors;
pub mod engine;
pub mod language;
pub mod models;
pub mod output;

// Re-exports for convenience
pub use config::{ConfigError, EngineConfig, IdDecoding};
pub use detectors::{create_detector, detect, detect_with_width, DetectorStrategy};
pub use engine::{
    decode_id, project, CacheKey, FoldState, FoldingEngine, Invalidation, RangeCache, Renderer,
};
pub use language::{classify, Language};
pub use models::*;
pub use output::{format_output, format_summary, FormatError, OutputFormat};
