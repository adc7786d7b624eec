//! chart_axis crate for axis range and tick computation
//!
//! Takes a numeric data range plus tick density settings and produces major
//! tick positions, sub tick positions and formatted labels for a 2-D chart
//! axis. Rendering, view state and input handling belong to the consuming
//! UI layer; everything here is a pure computation over values.

pub mod data_types;
pub mod range;
pub mod ticker;

pub use data_types::{TickSet, TickStepStrategy, TickerConfig};
pub use range::AxisRange;
pub use ticker::{LinearTicker, Ticker};
