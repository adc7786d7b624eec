//! Tick placement for linear axes

use tracing::trace;

use crate::data_types::{TickSet, TickStepStrategy, TickerConfig};
use crate::range::AxisRange;

/// Mantissa values considered readable for a tick step.
const READABLE_MANTISSAS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Tick computation capability.
///
/// Every algorithm method has a default body implementing the standard
/// behavior, so an implementor supplies the three configuration accessors
/// and overrides selectively (a custom label format, a different sub tick
/// policy). None of the methods fail: degenerate input degrades to empty
/// output, which callers treat as "nothing to draw".
pub trait Ticker {
    fn tick_step_strategy(&self) -> TickStepStrategy;
    fn tick_count(&self) -> usize;
    fn tick_origin(&self) -> f64;

    /// Runs the full pipeline: step selection, tick placement, optional sub
    /// ticks and labels, everything trimmed to `range`.
    fn generate(&self, range: AxisRange, want_sub_ticks: bool, want_labels: bool) -> TickSet {
        let tick_step = self.tick_step(range);

        let mut ticks = self.trim_ticks(range, self.create_tick_vector(tick_step, range), true);
        // second pass catches extra ticks an overridden create_tick_vector may emit
        ticks = self.trim_ticks(range, ticks, true);

        let sub_ticks = if want_sub_ticks && !ticks.is_empty() {
            let sub_tick_count = self.sub_tick_count(tick_step);
            self.trim_ticks(
                range,
                self.create_sub_tick_vector(sub_tick_count, &ticks),
                false,
            )
        } else {
            Vec::new()
        };

        // the outliers were only needed while interpolating sub ticks
        ticks = self.trim_ticks(range, ticks, false);
        if ticks.is_empty() {
            trace!(
                lower = range.lower,
                upper = range.upper,
                "no ticks fall inside the range"
            );
        }

        let labels = if want_labels {
            self.create_label_vector(&ticks)
        } else {
            Vec::new()
        };

        TickSet {
            ticks,
            sub_ticks,
            labels,
        }
    }

    fn tick_step(&self, range: AxisRange) -> f64 {
        // the small offset keeps the step stable when the span divides the count exactly
        let exact_step = range.size() / (self.tick_count() as f64 + 1e-10);
        self.clean_mantissa(exact_step)
    }

    /// Splits a value into `(mantissa, magnitude)` with the mantissa in
    /// `[1, 10)` for finite positive input. Non-positive input propagates
    /// as `NaN`.
    fn mantissa(&self, input: f64) -> (f64, f64) {
        let magnitude = 10f64.powf(input.log10().floor());
        (input / magnitude, magnitude)
    }

    /// Rounds `input` to a value whose mantissa suits the active strategy.
    fn clean_mantissa(&self, input: f64) -> f64 {
        let (mantissa, magnitude) = self.mantissa(input);
        match self.tick_step_strategy() {
            TickStepStrategy::Readability => {
                self.pick_closest(mantissa, &READABLE_MANTISSAS) * magnitude
            }
            TickStepStrategy::MeetTickCount => {
                // rounds toward zero, not to nearest
                if mantissa <= 5.0 {
                    (mantissa * 2.0).trunc() / 2.0 * magnitude
                } else {
                    (mantissa / 2.0).trunc() * 2.0 * magnitude
                }
            }
        }
    }

    /// Preferred number of sub ticks between two majors separated by
    /// `tick_step`, chosen so the sub tick spacing stays a round number.
    fn sub_tick_count(&self, tick_step: f64) -> usize {
        let epsilon = 0.01;
        let (mantissa, _) = self.mantissa(tick_step);
        let frac_part = mantissa.fract();
        let mut int_part = mantissa.trunc() as i64;

        if frac_part < epsilon || 1.0 - frac_part < epsilon {
            // (almost) integer mantissa
            if 1.0 - frac_part < epsilon {
                int_part += 1;
            }
            match int_part {
                1 => 4,
                2 => 3,
                3 => 2,
                4 => 3,
                5 => 4,
                6 => 2,
                7 => 6,
                8 => 3,
                9 => 2,
                _ => 0,
            }
        } else if (frac_part - 0.5).abs() < epsilon {
            // *.5 mantissa
            match int_part {
                1 => 2,
                2 => 4,
                3 => 4,
                4 => 2,
                5 => 4,
                6 => 4,
                7 => 2,
                8 => 4,
                9 => 4,
                _ => 0,
            }
        } else {
            // other fractions have no clean subdivision, keep a single sub tick
            1
        }
    }

    /// Fixed width, fixed precision label text. Layout code may rely on the
    /// field staying 8 characters wide for typical magnitudes; trailing
    /// zeros are never trimmed and scientific notation is never used.
    fn tick_label(&self, tick: f64) -> String {
        format!("{tick:8.3}")
    }

    /// Places ticks phase-locked to the origin across the whole range, one
    /// step beyond each edge.
    fn create_tick_vector(&self, tick_step: f64, range: AxisRange) -> Vec<f64> {
        let origin = self.tick_origin();
        let first_step = ((range.lower - origin) / tick_step).floor();
        let last_step = ((range.upper - origin) / tick_step).ceil();
        if !first_step.is_finite() || !last_step.is_finite() {
            return Vec::new();
        }

        let first_step = first_step as i64;
        let tick_count = (last_step as i64)
            .saturating_sub(first_step)
            .saturating_add(1);
        if tick_count <= 0 {
            return Vec::new();
        }
        (0..tick_count)
            .map(|i| origin + (first_step + i) as f64 * tick_step)
            .collect()
    }

    /// Inserts `sub_tick_count` evenly spaced points between each adjacent
    /// pair of major ticks.
    fn create_sub_tick_vector(&self, sub_tick_count: usize, ticks: &[f64]) -> Vec<f64> {
        if sub_tick_count == 0 || ticks.len() < 2 {
            return Vec::new();
        }
        let mut result = Vec::with_capacity((ticks.len() - 1) * sub_tick_count);
        for pair in ticks.windows(2) {
            let sub_tick_step = (pair[1] - pair[0]) / (sub_tick_count as f64 + 1.0);
            for k in 1..=sub_tick_count {
                result.push(pair[0] + k as f64 * sub_tick_step);
            }
        }
        result
    }

    fn create_label_vector(&self, ticks: &[f64]) -> Vec<String> {
        ticks.iter().map(|&tick| self.tick_label(tick)).collect()
    }

    /// Clips `ticks` to the range. With `keep_one_outlier`, a single tick
    /// beyond each edge survives so axis end caps can draw a partial
    /// segment past the last visible tick.
    fn trim_ticks(&self, range: AxisRange, ticks: Vec<f64>, keep_one_outlier: bool) -> Vec<f64> {
        let low_index = ticks.iter().position(|&tick| tick >= range.lower);
        let high_index = ticks.iter().rposition(|&tick| tick <= range.upper);
        let (Some(low_index), Some(high_index)) = (low_index, high_index) else {
            return Vec::new();
        };

        let keep = if keep_one_outlier { 1 } else { 0 };
        let trim_front = (low_index as i64 - keep).max(0) as usize;
        let trim_back = (ticks.len() as i64 - 1 - keep - high_index as i64).max(0) as usize;
        if trim_front == 0 && trim_back == 0 {
            return ticks;
        }
        let end = ticks.len() - trim_back;
        if trim_front >= end {
            return Vec::new();
        }
        ticks[trim_front..end].to_vec()
    }

    /// Nearest candidate by absolute distance; the first minimal candidate
    /// in ascending order wins ties.
    fn pick_closest(&self, target: f64, candidates: &[f64]) -> f64 {
        if candidates.len() == 1 {
            return candidates[0];
        }
        let mut sorted = candidates.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let Some(&first) = sorted.first() else {
            return target;
        };
        let mut closest = first;
        for &candidate in &sorted[1..] {
            if (candidate - target).abs() < (closest - target).abs() {
                closest = candidate;
            }
        }
        closest
    }
}

/// Standard linear axis ticker: plain configuration on top of the default
/// algorithm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearTicker {
    pub tick_step_strategy: TickStepStrategy,
    pub tick_count: usize,
    pub tick_origin: f64,
}

impl LinearTicker {
    pub fn new(tick_step_strategy: TickStepStrategy, tick_count: usize, tick_origin: f64) -> Self {
        Self {
            tick_step_strategy,
            tick_count,
            tick_origin,
        }
    }

    pub fn from_config(config: &TickerConfig) -> Self {
        Self {
            tick_step_strategy: config.strategy,
            tick_count: config.tick_count,
            tick_origin: config.tick_origin,
        }
    }
}

impl Default for LinearTicker {
    fn default() -> Self {
        Self::from_config(&TickerConfig::default())
    }
}

impl Ticker for LinearTicker {
    fn tick_step_strategy(&self) -> TickStepStrategy {
        self.tick_step_strategy
    }

    fn tick_count(&self) -> usize {
        self.tick_count
    }

    fn tick_origin(&self) -> f64 {
        self.tick_origin
    }
}
