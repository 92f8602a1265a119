//! Tunables for edge auto-scroll.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for the reorder controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReorderConfig {
    /// Upper bound (px) on the edge distance that triggers auto-scroll
    pub max_proximity_cutoff: f64,
    /// Viewport width is divided by this to get the cutoff for narrow grids
    pub proximity_divisor: f64,
    /// Scroll distance (px) per tick when the pointer sits right on an edge
    pub speed_factor: f64,
    /// Auto-scroll timer period in milliseconds
    pub tick_interval_ms: u32,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            max_proximity_cutoff: 140.0,
            proximity_divisor: 6.0,
            speed_factor: 16.0,
            tick_interval_ms: 10,
        }
    }
}

impl ReorderConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Distance from an edge under which auto-scroll kicks in.
    pub fn proximity_cutoff(&self, viewport_width: f64) -> f64 {
        self.max_proximity_cutoff
            .min(viewport_width / self.proximity_divisor)
    }
}
