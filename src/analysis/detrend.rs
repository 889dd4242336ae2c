//! Detrending: DC offset and linear trend removal
//!
//! The trend is fitted with closed-form ordinary least squares of sample
//! value against sample index.

/// Remove the mean and the least-squares linear trend from `signal` in place.
///
/// Buffers shorter than two samples have no defined regression line; for
/// those only the mean is removed (a single sample becomes `0.0`).
pub fn detrend(signal: &mut [f32]) {
    let n = signal.len();
    if n == 0 {
        return;
    }

    remove_mean(signal);

    if n < 2 {
        return;
    }

    let (slope, intercept) = linear_fit(signal);
    for (i, s) in signal.iter_mut().enumerate() {
        *s -= slope * i as f32 + intercept;
    }
}

/// Subtract the arithmetic mean from every sample.
pub fn remove_mean(signal: &mut [f32]) {
    if signal.is_empty() {
        return;
    }

    let mean = mean(signal);
    for s in signal.iter_mut() {
        *s -= mean;
    }
}

/// Arithmetic mean of the samples (0.0 for an empty slice).
pub fn mean(signal: &[f32]) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }
    signal.iter().sum::<f32>() / signal.len() as f32
}

/// Least-squares `(slope, intercept)` of value against index.
///
/// Sums are accumulated in f64; for `N >= 2` the denominator
/// `N·Σx² − (Σx)²` is strictly positive.
pub fn linear_fit(signal: &[f32]) -> (f32, f32) {
    let n = signal.len() as f64;
    if signal.len() < 2 {
        return (0.0, 0.0);
    }

    let mut sum_x = 0.0f64;
    let mut sum_y = 0.0f64;
    let mut sum_xy = 0.0f64;
    let mut sum_x2 = 0.0f64;
    for (i, &s) in signal.iter().enumerate() {
        let x = i as f64;
        let y = s as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    (slope as f32, intercept as f32)
}
