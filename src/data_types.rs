// Configuration and output value types for the tick computation core

use eyre::Result;
use serde::{Deserialize, Serialize};

/// Governs how the raw tick step is rounded to a displayable value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickStepStrategy {
    /// Favor conventional round numbers over matching the requested count.
    Readability,
    /// Allow less readable steps that land closer to the requested count.
    MeetTickCount,
}

impl Default for TickStepStrategy {
    fn default() -> Self {
        Self::Readability
    }
}

/// Serializable ticker settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickerConfig {
    pub strategy: TickStepStrategy,
    /// Target number of major ticks; advisory, not exact.
    pub tick_count: usize,
    /// Anchor value all tick positions are offsets of.
    pub tick_origin: f64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            strategy: TickStepStrategy::Readability,
            tick_count: 5,
            tick_origin: 0.0,
        }
    }
}

impl TickerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Contient les graduations calculées pour un axe.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickSet {
    /// Major tick positions, ascending, clipped to the generating range.
    pub ticks: Vec<f64>,
    /// Minor tick positions between majors, ascending, clipped to the range.
    pub sub_ticks: Vec<f64>,
    /// One label per major tick, same order; empty when labels were not
    /// requested.
    pub labels: Vec<String>,
}

impl TickSet {
    /// Nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty() && self.sub_ticks.is_empty()
    }
}
