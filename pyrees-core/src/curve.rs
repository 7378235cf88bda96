//! Trapezoidal conversion curve
//!
//! Maps a raw measurement onto a bounded mark:
//!
//! ```text
//! mark
//!  max |        ________
//!      |       /        \
//!      |      /          \
//!    0 |_____/            \______
//!           lo lotol  hitol hi      value
//! ```
//!
//! Regions are evaluated top to bottom, first match wins:
//!
//! 1. `value < lo` or `value > hi` → 0
//! 2. `lotol <= value <= hitol` → `max_mark`
//! 3. `lo <= value < lotol` → rising ramp
//! 4. `hitol < value <= hi` → falling ramp
//! 5. anything else (NaN) → 0

use crate::errors::CurveError;

/// Parameters of one conversion curve: `(max_mark, lo, lotol, hitol, hi)`.
///
/// Invariant: `lo <= lotol <= hitol <= hi` and `max_mark >= 0`, all finite.
/// Values built with [`CurveParams::new`] are checked; the built-in table is
/// covered by tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    max_mark: f64,
    lo: f64,
    lotol: f64,
    hitol: f64,
    hi: f64,
}

impl CurveParams {
    /// Build curve parameters, rejecting anything that breaks the invariant.
    pub fn new(max_mark: f64, lo: f64, lotol: f64, hitol: f64, hi: f64) -> Result<Self, CurveError> {
        if !max_mark.is_finite() || max_mark < 0.0 {
            return Err(CurveError::InvalidMaxMark(max_mark));
        }
        let finite = [lo, lotol, hitol, hi].iter().all(|v| v.is_finite());
        if !finite || !(lo <= lotol && lotol <= hitol && hitol <= hi) {
            return Err(CurveError::UnorderedBounds { lo, lotol, hitol, hi });
        }
        Ok(Self::from_parts(max_mark, lo, lotol, hitol, hi))
    }

    /// Unchecked constructor for compile-time tables.
    pub(crate) const fn from_parts(max_mark: f64, lo: f64, lotol: f64, hitol: f64, hi: f64) -> Self {
        Self { max_mark, lo, lotol, hitol, hi }
    }

    pub fn max_mark(&self) -> f64 {
        self.max_mark
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn lotol(&self) -> f64 {
        self.lotol
    }

    pub fn hitol(&self) -> f64 {
        self.hitol
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Convert a raw measurement into a mark in `[0, max_mark]`.
    ///
    /// The plateau is tested before either ramp, so a degenerate ramp
    /// (`lo == lotol` or `hitol == hi`) is never evaluated and cannot divide
    /// by zero.
    #[must_use]
    pub fn convert(&self, value: f64) -> f64 {
        let Self { max_mark, lo, lotol, hitol, hi } = *self;

        if value < lo || value > hi {
            0.0
        } else if lotol <= value && value <= hitol {
            max_mark
        } else if lo <= value && value < lotol {
            max_mark * (value - lo) / (lotol - lo)
        } else if hitol < value && value <= hi {
            max_mark * (hi - value) / (hi - hitol)
        } else {
            0.0
        }
    }
}

/// Free-function form of [`CurveParams::convert`].
#[must_use]
#[inline]
pub fn convert(value: f64, params: &CurveParams) -> f64 {
    params.convert(value)
}
