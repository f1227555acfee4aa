//! Typed interval and point ranges
//!
//! A [`Range`] is either a two-bound interval with independent
//! inclusive/exclusive flags, or a single point. Point ranges test
//! membership by bit identity, so a NaN point contains NaN.
//!
//! Ranges are built through [`RangeFactory`](crate::RangeFactory) and are
//! immutable afterwards.

use std::fmt;

use crate::error::{RangeError, RangeResult};
use crate::value::{DataType, RangeValue};

/// Immutable interval or point over one sample domain
#[derive(Debug, Clone, Copy)]
pub struct Range<T: RangeValue> {
    min: T,
    max: T,
    min_included: bool,
    max_included: bool,
    point: bool,
}

impl<T: RangeValue> Range<T> {
    /// Validate bounds and build the interval or point variant.
    ///
    /// Reversed bounds are swapped; each inclusion flag stays with the
    /// value it was given for. Numerically equal bounds collapse to a point
    /// at `min`, including `-0.0` and `0.0`, and that point then matches
    /// only its own bit pattern.
    pub(crate) fn new(min: T, min_included: bool, max: T, max_included: bool) -> RangeResult<Self> {
        match (min.is_nan(), max.is_nan()) {
            (true, true) => return Self::checked_point(min, min_included || max_included),
            (true, false) | (false, true) => {
                return Err(RangeError::MixedNaN {
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
            (false, false) => {}
        }

        if min == max {
            return Self::checked_point(min, min_included || max_included);
        }

        let (min, min_included, max, max_included) = if max < min {
            (max, max_included, min, min_included)
        } else {
            (min, min_included, max, max_included)
        };

        Ok(Self {
            min,
            max,
            min_included,
            max_included,
            point: false,
        })
    }

    /// Point range holding a single value, both bounds included
    pub(crate) fn point(value: T) -> Self {
        Self {
            min: value,
            max: value,
            min_included: true,
            max_included: true,
            point: true,
        }
    }

    fn checked_point(value: T, any_included: bool) -> RangeResult<Self> {
        if !any_included {
            return Err(RangeError::EmptyPoint {
                value: value.to_string(),
            });
        }
        Ok(Self::point(value))
    }

    /// Lower bound
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// Whether the lower bound belongs to the range
    #[inline]
    pub fn is_min_included(&self) -> bool {
        self.min_included
    }

    /// Whether the upper bound belongs to the range
    #[inline]
    pub fn is_max_included(&self) -> bool {
        self.max_included
    }

    /// True for single-value ranges
    #[inline]
    pub fn is_point(&self) -> bool {
        self.point
    }

    /// True for a NaN point range
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.point && self.min.is_nan()
    }

    /// Sample domain of the range
    #[inline]
    pub fn data_type(&self) -> DataType {
        T::DATA_TYPE
    }

    /// Check whether `value` lies in the range.
    ///
    /// Intervals honour the bound flags; NaN is never inside an interval.
    /// Points compare by bit identity.
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_range::RangeFactory;
    ///
    /// let r = RangeFactory::create(0u8, true, 10u8, false).unwrap();
    /// assert!(r.contains(0));
    /// assert!(r.contains(9));
    /// assert!(!r.contains(10));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        if self.point {
            return self.min.bits_eq(value);
        }
        let above = if self.min_included {
            value >= self.min
        } else {
            value > self.min
        };
        let below = if self.max_included {
            value <= self.max
        } else {
            value < self.max
        };
        above && below
    }

    /// Check whether every value of `other` is also in `self`
    pub fn contains_range(&self, other: &Range<T>) -> bool {
        if self.is_nan() || other.is_nan() {
            return self.is_nan() && other.is_nan();
        }
        if other.point {
            return self.contains(other.min);
        }
        if self.point {
            return false;
        }

        let lower_ok = other.min > self.min
            || (other.min == self.min && (self.min_included || !other.min_included));
        let upper_ok = other.max < self.max
            || (other.max == self.max && (self.max_included || !other.max_included));
        lower_ok && upper_ok
    }

    /// Check whether `self` and `other` share at least one value
    pub fn intersects(&self, other: &Range<T>) -> bool {
        if self.is_nan() || other.is_nan() {
            return self.is_nan() && other.is_nan();
        }
        if other.point {
            return self.contains(other.min);
        }
        if self.point {
            return other.contains(self.min);
        }

        let reaches_other = self.max > other.min
            || (self.max == other.min && self.max_included && other.min_included);
        let reached_by_other = other.max > self.min
            || (other.max == self.min && other.max_included && self.min_included);
        reaches_other && reached_by_other
    }

    /// Widen the bounds to `f64`, keeping flags and the point form
    pub fn to_f64(&self) -> Range<f64> {
        Range {
            min: self.min.to_f64(),
            max: self.max.to_f64(),
            min_included: self.min_included,
            max_included: self.max_included,
            point: self.point,
        }
    }
}

impl<T: RangeValue> PartialEq for Range<T> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
            && self.min_included == other.min_included
            && self.max_included == other.max_included
            && self.min.bits_eq(other.min)
            && self.max.bits_eq(other.max)
    }
}

impl<T: RangeValue> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.point {
            return write!(f, "[{}]", self.min);
        }
        let open = if self.min_included { '[' } else { '(' };
        let close = if self.max_included { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.min, self.max, close)
    }
}
