//! G-code Analyzer
//!
//! Reads G-code produced by 3D-printer slicers and reports what it can tell
//! about the print.
//!
//! This library provides:
//! - Slicer metadata extraction from header and footer comments
//! - Layer marker counting
//! - Print time estimation by simulating linear moves
//! - Configuration and a command-line front end

pub mod cli;
pub mod config;
pub mod core;
pub mod estimate;
pub mod layers;
pub mod metadata;
pub mod parser;

// Re-exports for clean public API
pub use crate::config::Config;
pub use crate::core::{GcodeDocument, Report, TimeSource};
pub use crate::estimate::{EstimatorConfig, Position, Simulation, ZeroFeedPolicy};
pub use crate::metadata::Metadata;
pub use crate::parser::{parse_line, ParsedLine};
