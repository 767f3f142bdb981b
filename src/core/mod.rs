//! Core Analysis
//!
//! The document type that owns G-code text and everything derived from it.

pub mod document;
pub mod report;

pub use document::GcodeDocument;
pub use report::{Report, TimeSource};
