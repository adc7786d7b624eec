// Axis range value type shared by the whole tick computation core

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Normalized `[lower, upper]` interval used as an axis domain.
///
/// Every constructing or mutating operation leaves `lower <= upper`. All
/// operations are total: invalid inputs flow through as `NaN`/`Inf` instead
/// of failing, and [`AxisRange::valid_range`] tells whether the result is
/// fit for axis use.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisRange {
    pub lower: f64,
    pub upper: f64,
}

impl AxisRange {
    /// Smallest span a range may have and still count as valid.
    pub const MIN_RANGE: f64 = 1e-280;
    /// Largest bound magnitude a range may have and still count as valid.
    pub const MAX_RANGE: f64 = 1e250;

    pub fn new(lower: f64, upper: f64) -> Self {
        let mut range = Self { lower, upper };
        range.normalize();
        range
    }

    /// Swaps the bounds if they arrive inverted.
    pub fn normalize(&mut self) {
        if self.lower > self.upper {
            std::mem::swap(&mut self.lower, &mut self.upper);
        }
    }

    pub fn size(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn center(&self) -> f64 {
        (self.upper + self.lower) * 0.5
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Grows the range to cover `other`. A `NaN` bound counts as unset and
    /// adopts the other side unconditionally, so a bounding range can be
    /// accumulated starting from an all-`NaN` value.
    pub fn expand(&mut self, other: AxisRange) {
        if self.lower > other.lower || self.lower.is_nan() {
            self.lower = other.lower;
        }
        if self.upper < other.upper || self.upper.is_nan() {
            self.upper = other.upper;
        }
    }

    /// Grows the range to cover a single value.
    pub fn expand_to_include(&mut self, value: f64) {
        if self.lower > value || self.lower.is_nan() {
            self.lower = value;
        }
        if self.upper < value || self.upper.is_nan() {
            self.upper = value;
        }
    }

    pub fn expanded(&self, other: AxisRange) -> Self {
        let mut result = *self;
        result.expand(other);
        result
    }

    pub fn expanded_to_include(&self, value: f64) -> Self {
        let mut result = *self;
        result.expand_to_include(value);
        result
    }

    /// Confines the range to `[lower_bound, upper_bound]`, sliding the whole
    /// window before clipping so the span survives whenever it fits inside
    /// the bound window. Panning a fixed-size viewport against a hard domain
    /// edge therefore stays continuous instead of rescaling.
    pub fn bounded(&self, lower_bound: f64, upper_bound: f64) -> Self {
        let (mut lower_bound, mut upper_bound) = (lower_bound, upper_bound);
        if lower_bound > upper_bound {
            std::mem::swap(&mut lower_bound, &mut upper_bound);
        }

        let bound_size = upper_bound - lower_bound;
        let mut result = *self;
        if result.lower < lower_bound {
            result.lower = lower_bound;
            result.upper = lower_bound + self.size();
            if result.upper > upper_bound || fuzzy_compare(self.size(), bound_size) {
                result.upper = upper_bound;
            }
        } else if result.upper > upper_bound {
            result.upper = upper_bound;
            result.lower = upper_bound - self.size();
            if result.lower < lower_bound || fuzzy_compare(self.size(), bound_size) {
                result.lower = lower_bound;
            }
        }
        result
    }

    /// Linear scales accept any normalized interval, zero-crossing included.
    pub fn sanitized_for_lin_scale(&self) -> Self {
        let mut sanitized = *self;
        sanitized.normalize();
        sanitized
    }

    /// Repairs a range for logarithmic use: no zero bound, no sign change.
    ///
    /// A single zero bound is pushed off zero to whichever of the bare
    /// `1e-3` constant and the proportional `bound * 1e-3` floor has the
    /// larger magnitude. A zero-straddling range keeps its wider sign
    /// domain and collapses the other bound with the same push rule.
    pub fn sanitized_for_log_scale(&self) -> Self {
        let range_fac: f64 = 1e-3;
        let mut sanitized = *self;
        sanitized.normalize();
        if sanitized.lower == 0.0 && sanitized.upper != 0.0 {
            sanitized.lower = range_fac.max(sanitized.upper * range_fac);
        } else if sanitized.lower != 0.0 && sanitized.upper == 0.0 {
            sanitized.upper = (-range_fac).min(sanitized.lower * range_fac);
        } else if sanitized.lower < 0.0 && sanitized.upper > 0.0 {
            // keep whichever sign domain is wider, collapse the other
            if -sanitized.lower > sanitized.upper {
                sanitized.upper = (-range_fac).min(sanitized.lower * range_fac);
            } else {
                sanitized.lower = range_fac.max(sanitized.upper * range_fac);
            }
        }
        // lower > 0 && upper < 0 would mean upper < lower, which normalize rules out
        sanitized
    }

    /// True when the bounds describe a range an axis can actually use: both
    /// inside the magnitude ceiling, span between the resolution floor and
    /// the ceiling, and no bound ratio overflowing to infinity.
    pub fn valid_bounds(lower: f64, upper: f64) -> bool {
        lower > -Self::MAX_RANGE
            && upper < Self::MAX_RANGE
            && (lower - upper).abs() > Self::MIN_RANGE
            && (lower - upper).abs() < Self::MAX_RANGE
            && !(lower > 0.0 && (upper / lower).is_infinite())
            && !(upper < 0.0 && (lower / upper).is_infinite())
    }

    pub fn valid_range(range: AxisRange) -> bool {
        Self::valid_bounds(range.lower, range.upper)
    }
}

impl Add for AxisRange {
    type Output = AxisRange;

    fn add(self, rhs: AxisRange) -> AxisRange {
        AxisRange::new(self.lower + rhs.lower, self.upper + rhs.upper)
    }
}

impl AddAssign for AxisRange {
    fn add_assign(&mut self, rhs: AxisRange) {
        self.lower += rhs.lower;
        self.upper += rhs.upper;
        self.normalize();
    }
}

impl Sub for AxisRange {
    type Output = AxisRange;

    fn sub(self, rhs: AxisRange) -> AxisRange {
        AxisRange::new(self.lower - rhs.lower, self.upper - rhs.upper)
    }
}

impl SubAssign for AxisRange {
    fn sub_assign(&mut self, rhs: AxisRange) {
        self.lower -= rhs.lower;
        self.upper -= rhs.upper;
        self.normalize();
    }
}

impl Add<f64> for AxisRange {
    type Output = AxisRange;

    fn add(self, value: f64) -> AxisRange {
        AxisRange::new(self.lower + value, self.upper + value)
    }
}

impl Add<AxisRange> for f64 {
    type Output = AxisRange;

    fn add(self, range: AxisRange) -> AxisRange {
        range + self
    }
}

impl Sub<f64> for AxisRange {
    type Output = AxisRange;

    fn sub(self, value: f64) -> AxisRange {
        AxisRange::new(self.lower - value, self.upper - value)
    }
}

impl Mul<f64> for AxisRange {
    type Output = AxisRange;

    fn mul(self, value: f64) -> AxisRange {
        AxisRange::new(self.lower * value, self.upper * value)
    }
}

impl Mul<AxisRange> for f64 {
    type Output = AxisRange;

    fn mul(self, range: AxisRange) -> AxisRange {
        range * self
    }
}

impl Div<f64> for AxisRange {
    type Output = AxisRange;

    fn div(self, value: f64) -> AxisRange {
        AxisRange::new(self.lower / value, self.upper / value)
    }
}

impl MulAssign<f64> for AxisRange {
    fn mul_assign(&mut self, value: f64) {
        self.lower *= value;
        self.upper *= value;
        self.normalize();
    }
}

impl DivAssign<f64> for AxisRange {
    fn div_assign(&mut self, value: f64) {
        self.lower /= value;
        self.upper /= value;
        self.normalize();
    }
}

// Qt-style fuzzy equality scaled to double precision.
fn fuzzy_compare(p1: f64, p2: f64) -> bool {
    (p1 - p2).abs() / f64::EPSILON <= p1.abs().min(p2.abs())
}
