//! Type-erased ranges for domains chosen at run time

use std::fmt;

use crate::error::{RangeError, RangeResult};
use crate::range::Range;
use crate::value::{DataType, RangeValue};

/// A [`Range`] over any one of the six supported domains.
///
/// Typed queries fail with [`RangeError::UnsupportedDomain`] when the
/// query type is not the range's own domain: a double range never
/// answers an int lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyRange {
    Byte(Range<u8>),
    UShort(Range<u16>),
    Short(Range<i16>),
    Int(Range<i32>),
    Float(Range<f32>),
    Double(Range<f64>),
}

macro_rules! dispatch {
    ($self:expr, $r:ident => $body:expr) => {
        match $self {
            AnyRange::Byte($r) => $body,
            AnyRange::UShort($r) => $body,
            AnyRange::Short($r) => $body,
            AnyRange::Int($r) => $body,
            AnyRange::Float($r) => $body,
            AnyRange::Double($r) => $body,
        }
    };
}

impl AnyRange {
    /// Domain of the wrapped range
    pub fn data_type(&self) -> DataType {
        dispatch!(self, r => r.data_type())
    }

    /// True for single-value ranges
    pub fn is_point(&self) -> bool {
        dispatch!(self, r => r.is_point())
    }

    /// Borrow the typed range, failing on a domain mismatch
    pub fn get<T: RangeValue>(&self) -> RangeResult<&Range<T>> {
        T::range_of(self).ok_or(RangeError::UnsupportedDomain {
            range: self.data_type(),
            query: T::DATA_TYPE,
        })
    }

    /// Typed containment query
    pub fn contains<T: RangeValue>(&self, value: T) -> RangeResult<bool> {
        Ok(self.get::<T>()?.contains(value))
    }

    pub fn contains_byte(&self, value: u8) -> RangeResult<bool> {
        self.contains(value)
    }

    pub fn contains_ushort(&self, value: u16) -> RangeResult<bool> {
        self.contains(value)
    }

    pub fn contains_short(&self, value: i16) -> RangeResult<bool> {
        self.contains(value)
    }

    pub fn contains_int(&self, value: i32) -> RangeResult<bool> {
        self.contains(value)
    }

    pub fn contains_float(&self, value: f32) -> RangeResult<bool> {
        self.contains(value)
    }

    pub fn contains_double(&self, value: f64) -> RangeResult<bool> {
        self.contains(value)
    }

    /// Test a sample carried as `f64`.
    ///
    /// The sample is narrowed to the range's domain first; a sample that
    /// has no exact representation there (e.g. `2.5` against an int
    /// range) is reported as not contained.
    pub fn contains_sample(&self, sample: f64) -> bool {
        fn narrowed<T: RangeValue>(range: &Range<T>, sample: f64) -> bool {
            T::from_f64_exact(sample).is_some_and(|v| range.contains(v))
        }
        dispatch!(self, r => narrowed(r, sample))
    }

    /// Widen to a double range
    pub fn to_f64(&self) -> Range<f64> {
        dispatch!(self, r => r.to_f64())
    }
}

impl<T: RangeValue> From<Range<T>> for AnyRange {
    fn from(range: Range<T>) -> Self {
        T::into_any(range)
    }
}

impl fmt::Display for AnyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, r => write!(f, "{} {}", r.data_type(), r))
    }
}
