//! Slicer Metadata
//!
//! Slicers embed facts about a print as comments. This module collects the
//! ones we understand into a [`Metadata`] record with a single pass over the
//! text. For a field tagged more than once, the last line wins.

pub mod recognizers;

use serde::Serialize;

/// Facts a slicer declared about the print. Absent fields were not found.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Originating slicer flavor, e.g. "Marlin"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    /// Slicer-declared print time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u64>,
    /// Filament length or mass, in the slicer's own unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filament_used: Option<f64>,
    /// Layer height in millimetres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_height: Option<f64>,
}

impl Metadata {
    /// Scan every line of `text` once.
    pub fn extract(text: &str) -> Self {
        let mut metadata = Self::default();
        for line in text.lines() {
            metadata.scan_line(line);
        }
        metadata
    }

    /// Fold one line into the record. Fields only ever go from absent to
    /// present or get overwritten by a newer value.
    pub fn scan_line(&mut self, line: &str) {
        // Every marker is a comment.
        if !line.contains(';') {
            return;
        }

        if let Some(flavor) = recognizers::flavor(line) {
            log::trace!("flavor tag: {}", flavor);
            self.flavor = Some(flavor.to_string());
        }
        if let Some(seconds) = recognizers::time(line) {
            log::trace!("time tag: {}s", seconds);
            self.estimated_time = Some(seconds);
        }
        if let Some(seconds) = recognizers::estimated_printing_time(line) {
            log::trace!("estimated printing time tag: {}s", seconds);
            self.estimated_time = Some(seconds);
        }
        if let Some(amount) = recognizers::filament_used(line) {
            self.filament_used = Some(amount);
        }
        if let Some(height) = recognizers::layer_height(line) {
            self.layer_height = Some(height);
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
