//! Quantile classification regression test
//!
//! Exact and histogram-approximated quantiles over a sine wave, ties, and
//! the population percentages of both variants.

use tessera_classify::{Classifier, ClassifierOptions, QuantileClassifier};
use tessera_test::{RegParams, data};

fn quantile(options: ClassifierOptions, values: &[f64]) -> tessera_classify::Classification {
    QuantileClassifier::new(options)
        .unwrap()
        .classify_values(values)
        .unwrap()
}

// ========================================================================
// Test: Exact quantiles of a sine wave
// ========================================================================

#[test]
fn quantile_reg_exact() {
    let mut rp = RegParams::new("quantile_exact");

    let values = data::sin_wave(5000, 999.0);
    let result = quantile(ClassifierOptions::new(10).with_percentages(true), &values);

    let breaks = result.breaks(0).unwrap();
    rp.compare_values(11.0, breaks.len() as f64, 0.0);
    assert!(breaks.windows(2).all(|w| w[0] < w[1]));

    // Median of a symmetric wave sits near zero
    rp.compare_values(0.0, breaks[5], 5.0);

    // Distinct samples fill every class exactly
    let p = result.percentages(0).unwrap().unwrap();
    rp.compare_slices(&[10.0; 10], p, 1e-9);

    assert!(rp.cleanup(), "quantile_reg exact tests failed");
}

// ========================================================================
// Test: Histogram quantiles track the exact ones
// ========================================================================

#[test]
fn quantile_reg_histogram() {
    let mut rp = RegParams::new("quantile_histogram");

    let values = data::sin_wave(5000, 999.0);
    let exact = quantile(ClassifierOptions::new(10), &values);
    let options = ClassifierOptions::new(10)
        .with_histogram(1000)
        .with_extrema(vec![(-999.0, 999.0)])
        .with_percentages(true);
    let approx = quantile(options, &values);

    let exact_breaks = exact.breaks(0).unwrap();
    let approx_breaks = approx.breaks(0).unwrap();
    rp.compare_values(exact_breaks.len() as f64, approx_breaks.len() as f64, 0.0);
    // Outer breaks are the declared span
    rp.compare_values(-999.0, approx_breaks[0], 0.0);
    rp.compare_values(999.0, approx_breaks[10], 0.0);
    rp.compare_slices(&exact_breaks[1..10], &approx_breaks[1..10], 10.0);

    let p = approx.percentages(0).unwrap().unwrap();
    rp.compare_values(100.0, p.iter().sum(), 1e-6);
    for &share in p {
        rp.compare_values(10.0, share, 3.0);
    }

    assert!(rp.cleanup(), "quantile_reg histogram tests failed");
}

// ========================================================================
// Test: Heavy ties
// ========================================================================

#[test]
fn quantile_reg_ties() {
    let mut rp = RegParams::new("quantile_ties");

    // Half the samples are zero
    let mut values = vec![0.0; 50];
    values.extend(data::ramp(50, 1.0, 1.0));
    let result = quantile(ClassifierOptions::new(4).with_percentages(true), &values);

    let breaks = result.breaks(0).unwrap();
    rp.compare_values(0.0, breaks[0], 0.0);
    rp.compare_values(50.0, *breaks.last().unwrap(), 0.0);
    // Zero fills two classes on its own, so one class is lost
    rp.compare_values(4.0, breaks.len() as f64, 0.0);
    rp.compare_slices(&[0.0, 1.0, 26.0, 50.0], breaks, 0.0);

    let p = result.percentages(0).unwrap().unwrap();
    rp.compare_slices(&[50.0, 25.0, 25.0], p, 1e-9);

    assert!(rp.cleanup(), "quantile_reg tie tests failed");
}

// ========================================================================
// Test: Known extrema drop outliers
// ========================================================================

#[test]
fn quantile_reg_known_extrema() {
    let mut rp = RegParams::new("quantile_extrema");

    let mut values = data::ramp(20, 0.0, 1.0);
    values.extend([-1e6, 1e6, f64::NAN]);
    let options = ClassifierOptions::new(2).with_extrema(vec![(0.0, 19.0)]);
    let result = quantile(options, &values);

    rp.compare_values(20.0, result.count(0).unwrap() as f64, 0.0);
    rp.compare_slices(&[0.0, 10.0, 19.0], result.breaks(0).unwrap(), 0.0);

    assert!(rp.cleanup(), "quantile_reg extrema tests failed");
}
