//! Sample domains and the numeric trait ranges are generic over
//!
//! Six primitive domains are supported:
//!
//! | [`DataType`] | Rust type | Notes                       |
//! |--------------|-----------|-----------------------------|
//! | `Byte`       | `u8`      | unsigned, 0..=255           |
//! | `UShort`     | `u16`     | unsigned, 0..=65535         |
//! | `Short`      | `i16`     | signed                      |
//! | `Int`        | `i32`     | signed                      |
//! | `Float`      | `f32`     | NaN allowed as a point only |
//! | `Double`     | `f64`     | NaN allowed as a point only |

use std::fmt;

use crate::any::AnyRange;
use crate::range::Range;

/// Primitive sample domain of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Unsigned 8-bit
    Byte,
    /// Unsigned 16-bit
    UShort,
    /// Signed 16-bit
    Short,
    /// Signed 32-bit
    Int,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
}

impl DataType {
    /// Lower-case name of the domain
    pub fn name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::UShort => "ushort",
            Self::Short => "short",
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Whether the domain is floating point (and so has NaN)
    pub fn is_floating(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Numeric sample type a [`Range`] can be built over
///
/// Implemented for `u8`, `u16`, `i16`, `i32`, `f32` and `f64` only.
pub trait RangeValue:
    Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static + sealed::Sealed
{
    /// Domain tag for this type
    const DATA_TYPE: DataType;

    /// True only for floating-point NaN
    fn is_nan(self) -> bool;

    /// Bit-identity comparison used by point ranges.
    ///
    /// For floats, all NaN patterns compare equal to each other and
    /// `0.0` differs from `-0.0`. For integers this is `==`.
    fn bits_eq(self, other: Self) -> bool;

    /// Widen to `f64` (exact for every supported type)
    fn to_f64(self) -> f64;

    /// Narrow an `f64` sample, only if the value is exactly representable
    fn from_f64_exact(value: f64) -> Option<Self>;

    /// Narrow an `f64` with `as` semantics (saturating, truncating)
    fn from_f64_saturating(value: f64) -> Self;

    /// Downcast a type-erased range to this domain
    fn range_of(range: &AnyRange) -> Option<&Range<Self>>;

    /// Wrap a typed range into the type-erased form
    fn into_any(range: Range<Self>) -> AnyRange;
}

macro_rules! impl_integer_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl RangeValue for $ty {
            const DATA_TYPE: DataType = DataType::$variant;

            #[inline]
            fn is_nan(self) -> bool {
                false
            }

            #[inline]
            fn bits_eq(self, other: Self) -> bool {
                self == other
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64_exact(value: f64) -> Option<Self> {
                if value.fract() == 0.0 && value >= <$ty>::MIN as f64 && value <= <$ty>::MAX as f64 {
                    Some(value as $ty)
                } else {
                    None
                }
            }

            #[inline]
            fn from_f64_saturating(value: f64) -> Self {
                value as $ty
            }

            fn range_of(range: &AnyRange) -> Option<&Range<Self>> {
                match range {
                    AnyRange::$variant(r) => Some(r),
                    _ => None,
                }
            }

            fn into_any(range: Range<Self>) -> AnyRange {
                AnyRange::$variant(range)
            }
        }
    )*};
}

impl_integer_value!(u8 => Byte, u16 => UShort, i16 => Short, i32 => Int);

macro_rules! impl_float_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl RangeValue for $ty {
            const DATA_TYPE: DataType = DataType::$variant;

            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }

            #[inline]
            fn bits_eq(self, other: Self) -> bool {
                // NaN payloads are collapsed so any NaN matches a NaN point
                if self.is_nan() || other.is_nan() {
                    return self.is_nan() && other.is_nan();
                }
                self.to_bits() == other.to_bits()
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64_exact(value: f64) -> Option<Self> {
                let narrowed = value as $ty;
                if value.is_nan() || narrowed as f64 == value {
                    Some(narrowed)
                } else {
                    None
                }
            }

            #[inline]
            fn from_f64_saturating(value: f64) -> Self {
                value as $ty
            }

            fn range_of(range: &AnyRange) -> Option<&Range<Self>> {
                match range {
                    AnyRange::$variant(r) => Some(r),
                    _ => None,
                }
            }

            fn into_any(range: Range<Self>) -> AnyRange {
                AnyRange::$variant(range)
            }
        }
    )*};
}

impl_float_value!(f32 => Float, f64 => Double);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_tags() {
        assert_eq!(u8::DATA_TYPE, DataType::Byte);
        assert_eq!(u16::DATA_TYPE, DataType::UShort);
        assert_eq!(i16::DATA_TYPE, DataType::Short);
        assert_eq!(i32::DATA_TYPE, DataType::Int);
        assert_eq!(f32::DATA_TYPE, DataType::Float);
        assert_eq!(f64::DATA_TYPE, DataType::Double);
        assert!(DataType::Float.is_floating());
        assert!(!DataType::UShort.is_floating());
        assert_eq!(DataType::UShort.to_string(), "ushort");
    }

    #[test]
    fn test_bits_eq_nan_and_signed_zero() {
        assert!(f64::NAN.bits_eq(f64::NAN));
        assert!(f64::NAN.bits_eq(-f64::NAN));
        assert!(!f64::NAN.bits_eq(1.0));
        assert!(!0.0f64.bits_eq(-0.0));
        assert!(1.5f32.bits_eq(1.5));
        assert!(7i32.bits_eq(7));
    }

    #[test]
    fn test_from_f64_exact() {
        assert_eq!(u8::from_f64_exact(255.0), Some(255));
        assert_eq!(u8::from_f64_exact(256.0), None);
        assert_eq!(u8::from_f64_exact(-1.0), None);
        assert_eq!(i16::from_f64_exact(-32768.0), Some(i16::MIN));
        assert_eq!(i32::from_f64_exact(2.5), None);
        assert_eq!(i32::from_f64_exact(f64::NAN), None);
        assert_eq!(f32::from_f64_exact(0.5), Some(0.5));
        assert_eq!(f32::from_f64_exact(0.1), None);
        assert!(f32::from_f64_exact(f64::NAN).is_some_and(f32::is_nan));
    }

    #[test]
    fn test_from_f64_saturating() {
        assert_eq!(u8::from_f64_saturating(300.0), 255);
        assert_eq!(u8::from_f64_saturating(-3.0), 0);
        assert_eq!(i16::from_f64_saturating(12.9), 12);
    }
}
