//! Per-series statistics shared by both correlation methods.
//!
//! Standard deviations here are population deviations (`ddof = 0`). With that
//! convention the sum of products of two z-scored series of length `n` is
//! exactly `n` times their Pearson coefficient.

use ndarray::{Array1, Array2, Array3, ArrayView1, ArrayView3, Axis, Zip};

/// Arithmetic mean of a series. NaN for an empty series.
pub fn mean(series: ArrayView1<f64>) -> f64 {
    series.sum() / series.len() as f64
}

/// Whether every element equals the first.
///
/// Checked exactly rather than through the variance: a constant 0.1 series has a
/// mean that is off by rounding, so its deviations are tiny but nonzero.
pub fn is_constant(series: ArrayView1<f64>) -> bool {
    match series.first() {
        Some(&first) => series.iter().all(|&x| x == first),
        None => true,
    }
}

// Population deviation of already-centred values, NaN for a constant series.
fn centred_std(centred: ArrayView1<f64>, constant: bool) -> f64 {
    if constant {
        return f64::NAN;
    }
    (centred.iter().map(|d| d * d).sum::<f64>() / centred.len() as f64).sqrt()
}

/// Standardise a series to zero mean and unit variance.
///
/// A constant series has no deviation to divide by, so every output element is NaN.
pub fn zscore_1d(series: ArrayView1<f64>) -> Array1<f64> {
    let mu = mean(series);
    let centred = series.mapv(|x| x - mu);
    let sigma = centred_std(centred.view(), is_constant(series));
    centred / sigma
}

/// Standardise a stimulus movie along its time axis, independently for every pixel.
///
/// `stimulus` is indexed `(time, row, column)`. Each `stimulus[.., row, col]` series
/// is z-scored on its own; values are never pooled across pixels. Constant pixels
/// come out as NaN, as in [`zscore_1d`].
pub fn zscore_axis0(stimulus: ArrayView3<f64>) -> Array3<f64> {
    let samples = stimulus.len_of(Axis(0)) as f64;

    let mu = stimulus.sum_axis(Axis(0)) / samples;
    let centred = &stimulus - &mu.insert_axis(Axis(0));

    let (_, height, width) = stimulus.dim();
    let mut sigma = Array2::<f64>::zeros((height, width));
    Zip::from(&mut sigma)
        .and(stimulus.lanes(Axis(0)))
        .and(centred.lanes(Axis(0)))
        .for_each(|s, series, deviations| {
            *s = centred_std(deviations, is_constant(series));
        });

    centred / &sigma.insert_axis(Axis(0))
}

/// Pearson correlation coefficient between two equal-length series.
///
/// The result is clamped to [-1, 1] to absorb rounding error. If either series is
/// constant the coefficient is undefined and NaN is returned.
pub fn pearson(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    debug_assert_eq!(x.len(), y.len());

    if is_constant(x) || is_constant(y) {
        return f64::NAN;
    }

    let x_mean = mean(x);
    let y_mean = mean(y);

    let mut covariance = 0.0;
    let mut x_sum_sq = 0.0;
    let mut y_sum_sq = 0.0;
    Zip::from(&x).and(&y).for_each(|&xi, &yi| {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        covariance += dx * dy;
        x_sum_sq += dx * dx;
        y_sum_sq += dy * dy;
    });

    let r = covariance / (x_sum_sq * y_sum_sq).sqrt();
    r.clamp(-1.0, 1.0)
}
