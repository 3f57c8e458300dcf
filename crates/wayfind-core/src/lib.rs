//! Wayfind Core Library
//!
//! Graph model, single-destination shortest-distance search, and
//! graph-file parsing for the wayfind CLI.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
