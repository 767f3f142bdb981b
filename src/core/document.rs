//! G-code Document
//!
//! Owns one file's text. Metadata is extracted when the document is built;
//! layer count and print time are derived on request and never change the
//! document.

use crate::core::report::{Report, TimeSource};
use crate::estimate::{self, EstimatorConfig, Simulation};
use crate::layers;
use crate::metadata::Metadata;

#[derive(Debug, Clone)]
pub struct GcodeDocument {
    text: String,
    metadata: Metadata,
    config: EstimatorConfig,
}

impl GcodeDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_config(text, EstimatorConfig::default())
    }

    pub fn with_config(text: impl Into<String>, config: EstimatorConfig) -> Self {
        let text = text.into();
        let metadata = Metadata::extract(&text);
        log::debug!("extracted metadata: {:?}", metadata);

        Self {
            text,
            metadata,
            config,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Number of layer marker comments; see [`layers::count_layers`].
    pub fn layer_count(&self) -> usize {
        layers::count_layers(&self.text)
    }

    /// Slicer-declared print time, if one was found and is non-zero.
    pub fn declared_time(&self) -> Option<u64> {
        self.metadata.estimated_time.filter(|&seconds| seconds > 0)
    }

    /// Print time in whole seconds.
    ///
    /// A slicer-declared time is returned as is; otherwise the moves are
    /// simulated.
    pub fn estimate_print_time(&self) -> u64 {
        match self.declared_time() {
            Some(seconds) => seconds,
            None => self.simulate().rounded_seconds(),
        }
    }

    /// Simulate every move, regardless of declared metadata.
    pub fn simulate(&self) -> Simulation {
        estimate::simulate(&self.text, &self.config)
    }

    /// Everything known about the document in one record.
    pub fn report(&self) -> Report {
        let (estimated_seconds, time_source, simulation) = match self.declared_time() {
            Some(seconds) => (seconds, TimeSource::Metadata, None),
            None => {
                let simulation = self.simulate();
                (
                    simulation.rounded_seconds(),
                    TimeSource::Simulation,
                    Some(simulation),
                )
            }
        };

        let layer_count = self.layer_count();
        log::debug!("{} layer markers, {}s from {}", layer_count, estimated_seconds, time_source);

        Report {
            metadata: self.metadata.clone(),
            layer_count,
            estimated_seconds,
            time_source,
            simulation,
        }
    }
}
