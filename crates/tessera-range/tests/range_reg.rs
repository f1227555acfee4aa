//! Range regression test
//!
//! Membership over every sample domain, point ranges, NaN handling and
//! the type-erased range.

use tessera_range::{AnyRange, DataType, RangeError, RangeFactory};
use tessera_test::RegParams;

fn flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

// ========================================================================
// Test: Byte interval membership
// ========================================================================

#[test]
fn range_reg_byte_interval() {
    let mut rp = RegParams::new("range_byte");

    let r = RangeFactory::create(0u8, true, 10u8, false).unwrap();
    rp.compare_values(1.0, flag(r.contains(0)), 0.0);
    rp.compare_values(1.0, flag(r.contains(9)), 0.0);
    rp.compare_values(0.0, flag(r.contains(10)), 0.0);
    rp.compare_values(0.0, flag(r.contains(255)), 0.0);

    // Values above 127 must not wrap around
    let high = RangeFactory::create(200u8, true, 255u8, true).unwrap();
    rp.compare_values(1.0, flag(high.contains(255)), 0.0);
    rp.compare_values(1.0, flag(high.contains(200)), 0.0);
    rp.compare_values(0.0, flag(high.contains(100)), 0.0);

    assert!(rp.cleanup(), "range_reg byte tests failed");
}

// ========================================================================
// Test: Unsigned short from raw 16-bit patterns
// ========================================================================

#[test]
fn range_reg_ushort_patterns() {
    let mut rp = RegParams::new("range_ushort");

    // -1 is 65535 and -32768 is 32768
    let r = RangeFactory::create_u(-32768, true, -1, true).unwrap();
    rp.compare_values(32768.0, r.min() as f64, 0.0);
    rp.compare_values(65535.0, r.max() as f64, 0.0);
    rp.compare_values(1.0, flag(r.contains(40000)), 0.0);
    rp.compare_values(0.0, flag(r.contains(1000)), 0.0);

    assert!(rp.cleanup(), "range_reg ushort tests failed");
}

// ========================================================================
// Test: Every integer domain with each flag combination
// ========================================================================

#[test]
fn range_reg_flag_combinations() {
    let mut rp = RegParams::new("range_flags");

    for (min_inc, max_inc) in [(true, true), (true, false), (false, true), (false, false)] {
        let s = RangeFactory::create(-5i16, min_inc, 5i16, max_inc).unwrap();
        let i = RangeFactory::create(-5i32, min_inc, 5i32, max_inc).unwrap();
        let f = RangeFactory::create(-5.0f32, min_inc, 5.0f32, max_inc).unwrap();
        let d = RangeFactory::create(-5.0f64, min_inc, 5.0f64, max_inc).unwrap();

        rp.compare_values(flag(min_inc), flag(s.contains(-5)), 0.0);
        rp.compare_values(flag(max_inc), flag(i.contains(5)), 0.0);
        rp.compare_values(flag(min_inc), flag(f.contains(-5.0)), 0.0);
        rp.compare_values(flag(max_inc), flag(d.contains(5.0)), 0.0);
        rp.compare_values(1.0, flag(s.contains(0) && i.contains(0)), 0.0);
    }

    assert!(rp.cleanup(), "range_reg flag tests failed");
}

// ========================================================================
// Test: Points and NaN
// ========================================================================

#[test]
fn range_reg_points_and_nan() {
    let mut rp = RegParams::new("range_nan");

    let no_data = RangeFactory::create_point(f64::NAN);
    rp.compare_values(1.0, flag(no_data.is_nan()), 0.0);
    rp.compare_values(1.0, flag(no_data.contains(f64::NAN)), 0.0);
    rp.compare_values(0.0, flag(no_data.contains(0.0)), 0.0);

    let both = RangeFactory::create(f32::NAN, true, f32::NAN, false).unwrap();
    rp.compare_values(1.0, flag(both.is_point()), 0.0);

    let interval = RangeFactory::create(0.0f64, true, 1.0f64, true).unwrap();
    rp.compare_values(0.0, flag(interval.contains(f64::NAN)), 0.0);

    assert!(matches!(
        RangeFactory::create(f64::NAN, true, 1.0, true),
        Err(RangeError::MixedNaN { .. })
    ));
    assert!(matches!(
        RangeFactory::create(3i32, false, 3i32, false),
        Err(RangeError::EmptyPoint { .. })
    ));

    // One excluded bound still makes a point, with both bounds included
    let p = RangeFactory::create(3i32, true, 3i32, false).unwrap();
    rp.compare_values(1.0, flag(p.is_point() && p.is_max_included()), 0.0);
    rp.compare_values(1.0, flag(p.contains(3)), 0.0);

    // Signed zeros are equal bounds; the point keeps the sign of min
    let zero = RangeFactory::create(-0.0f64, true, 0.0, true).unwrap();
    rp.compare_values(1.0, flag(zero.is_point()), 0.0);
    rp.compare_values(1.0, flag(zero.contains(-0.0)), 0.0);
    rp.compare_values(0.0, flag(zero.contains(0.0)), 0.0);

    assert!(rp.cleanup(), "range_reg point tests failed");
}

// ========================================================================
// Test: Type-erased ranges
// ========================================================================

#[test]
fn range_reg_any_range() {
    let mut rp = RegParams::new("range_any");

    let any: AnyRange = RangeFactory::create(0i16, true, 5i16, false).unwrap().into();
    assert_eq!(any.data_type(), DataType::Short);
    rp.compare_values(1.0, flag(any.contains_short(4).unwrap()), 0.0);
    rp.compare_values(0.0, flag(any.contains_short(5).unwrap()), 0.0);
    assert!(matches!(
        any.contains_byte(4),
        Err(RangeError::UnsupportedDomain {
            range: DataType::Short,
            query: DataType::Byte
        })
    ));

    // Samples carried as f64 are narrowed only when exact
    rp.compare_values(1.0, flag(any.contains_sample(2.0)), 0.0);
    rp.compare_values(0.0, flag(any.contains_sample(2.5)), 0.0);
    rp.compare_values(0.0, flag(any.contains_sample(f64::NAN)), 0.0);

    let wide = RangeFactory::create_any(DataType::Byte, -10.0, true, 300.0, true).unwrap();
    rp.compare_values(1.0, flag(wide.contains_byte(0).unwrap()), 0.0);
    rp.compare_values(1.0, flag(wide.contains_byte(255).unwrap()), 0.0);

    assert!(rp.cleanup(), "range_reg any tests failed");
}

// ========================================================================
// Test: Range algebra
// ========================================================================

#[test]
fn range_reg_algebra() {
    let mut rp = RegParams::new("range_algebra");

    let outer = RangeFactory::create(0i32, true, 100i32, true).unwrap();
    let inner = RangeFactory::create(10i32, true, 20i32, false).unwrap();
    let apart = RangeFactory::create(100i32, false, 200i32, true).unwrap();
    let touching = RangeFactory::create(100i32, true, 200i32, true).unwrap();

    rp.compare_values(1.0, flag(outer.contains_range(&inner)), 0.0);
    rp.compare_values(0.0, flag(inner.contains_range(&outer)), 0.0);
    rp.compare_values(0.0, flag(outer.intersects(&apart)), 0.0);
    rp.compare_values(1.0, flag(outer.intersects(&touching)), 0.0);

    let widened = RangeFactory::create(1u8, true, 9u8, false).unwrap().to_f64();
    rp.compare_values(1.0, widened.min(), 0.0);
    rp.compare_values(9.0, widened.max(), 0.0);
    rp.compare_values(0.0, flag(widened.contains(9.0)), 0.0);
    assert_eq!(widened.to_string(), "[1, 9)");

    assert!(rp.cleanup(), "range_reg algebra tests failed");
}
