//! Range construction
//!
//! [`RangeFactory`] is the only way to build a [`Range`]. It normalizes
//! bound order, collapses `min == max` to the point variant and rejects
//! ranges that cannot hold a value.

use crate::any::AnyRange;
use crate::error::RangeResult;
use crate::range::Range;
use crate::value::{DataType, RangeValue};

/// Constructors for [`Range`] and [`AnyRange`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeFactory;

impl RangeFactory {
    /// Build a range from two bounds and their inclusion flags.
    ///
    /// Equal bounds give a point at `min`. Float points match by bit
    /// pattern, so `create(-0.0, true, 0.0, true)` contains `-0.0` but not
    /// `0.0`.
    ///
    /// # Errors
    ///
    /// - [`RangeError::EmptyPoint`](crate::RangeError::EmptyPoint) when
    ///   `min == max` and neither bound is included
    /// - [`RangeError::MixedNaN`](crate::RangeError::MixedNaN) when exactly
    ///   one bound is NaN
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_range::RangeFactory;
    ///
    /// let a = RangeFactory::create(5i32, true, 1, true).unwrap();
    /// let b = RangeFactory::create(1i32, true, 5, true).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn create<T: RangeValue>(
        min: T,
        min_included: bool,
        max: T,
        max_included: bool,
    ) -> RangeResult<Range<T>> {
        Range::new(min, min_included, max, max_included)
    }

    /// Build a single-value range. NaN is accepted for floating types.
    pub fn create_point<T: RangeValue>(value: T) -> Range<T> {
        Range::point(value)
    }

    /// Build an unsigned 16-bit range from raw 16-bit patterns.
    ///
    /// `-1i16` stands for `65535`; values are promoted before comparison,
    /// so no sign-extension leaks into the ordering.
    pub fn create_u(
        min: i16,
        min_included: bool,
        max: i16,
        max_included: bool,
    ) -> RangeResult<Range<u16>> {
        Range::new(min as u16, min_included, max as u16, max_included)
    }

    /// Build a range whose domain is only known at run time.
    ///
    /// Bounds are narrowed with `as` semantics (saturating for integers).
    pub fn create_any(
        data_type: DataType,
        min: f64,
        min_included: bool,
        max: f64,
        max_included: bool,
    ) -> RangeResult<AnyRange> {
        fn build<T: RangeValue>(
            min: f64,
            min_included: bool,
            max: f64,
            max_included: bool,
        ) -> RangeResult<AnyRange> {
            let range = Range::new(
                T::from_f64_saturating(min),
                min_included,
                T::from_f64_saturating(max),
                max_included,
            )?;
            Ok(range.into())
        }

        match data_type {
            DataType::Byte => build::<u8>(min, min_included, max, max_included),
            DataType::UShort => build::<u16>(min, min_included, max, max_included),
            DataType::Short => build::<i16>(min, min_included, max, max_included),
            DataType::Int => build::<i32>(min, min_included, max, max_included),
            DataType::Float => build::<f32>(min, min_included, max, max_included),
            DataType::Double => build::<f64>(min, min_included, max, max_included),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RangeError;

    #[test]
    fn test_create_normalizes_order() {
        let a = RangeFactory::create(5.0f32, true, 1.0, true).unwrap();
        assert_eq!(a.min(), 1.0);
        assert_eq!(a.max(), 5.0);
        for v in [0.5f32, 1.0, 3.0, 5.0, 5.5] {
            let b = RangeFactory::create(1.0f32, true, 5.0, true).unwrap();
            assert_eq!(a.contains(v), b.contains(v));
        }
    }

    #[test]
    fn test_create_point_collapse() {
        let r = RangeFactory::create(2i32, false, 2, true).unwrap();
        assert!(r.is_point());
        assert!(r.contains(2));
        assert_eq!(
            RangeFactory::create(2i32, false, 2, false).unwrap_err(),
            RangeError::EmptyPoint {
                value: "2".to_string()
            }
        );
    }

    #[test]
    fn test_create_u_promotes() {
        // -1 as u16 is 65535, -32768 as u16 is 32768
        let r = RangeFactory::create_u(-32768, true, -1, true).unwrap();
        assert_eq!(r.min(), 32768);
        assert_eq!(r.max(), 65535);
        assert!(r.contains(40000));
        assert!(!r.contains(100));

        let low = RangeFactory::create_u(0, true, 100, false).unwrap();
        assert!(!low.contains(65535));
    }

    #[test]
    fn test_create_any() {
        let r = RangeFactory::create_any(DataType::Byte, -10.0, true, 300.0, true).unwrap();
        assert_eq!(r.data_type(), DataType::Byte);
        let bytes = r.get::<u8>().unwrap();
        assert_eq!(bytes.min(), 0);
        assert_eq!(bytes.max(), 255);

        let nan = RangeFactory::create_any(DataType::Float, f64::NAN, true, f64::NAN, true).unwrap();
        assert!(nan.contains_float(f32::NAN).unwrap());

        assert!(matches!(
            RangeFactory::create_any(DataType::Double, f64::NAN, true, 1.0, true),
            Err(RangeError::MixedNaN { .. })
        ));
    }
}
