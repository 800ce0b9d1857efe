//! Invisible spacer box.

use mathbox_types::Result;
use mathbox_types::error::{check_length, check_offset};

use crate::tex_box::Metrics;

/// A box with measurements but no visible content.
#[derive(Debug, Clone, PartialEq)]
pub struct StrutBox {
    metrics: Metrics,
}

impl StrutBox {
    pub fn new(width: f64, height: f64, depth: f64, shift: f64) -> Result<Self> {
        Ok(Self {
            metrics: Metrics {
                width: check_length("strut width", width)?,
                height: check_length("strut height", height)?,
                depth: check_length("strut depth", depth)?,
                shift: check_offset("strut shift", shift)?,
            },
        })
    }

    /// A zero-sized strut.
    pub fn empty() -> Self {
        Self {
            metrics: Metrics::default(),
        }
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }
}
