//! Report renderers for classification results.
//!
//! - [`terminal`] — colored per-instance table with summary counts; respects
//!   `--quiet`.
//! - JSON output is handled in `main`: the bare ordered label array.

pub mod terminal;
