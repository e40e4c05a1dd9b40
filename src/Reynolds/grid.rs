//! # Grid Module
//!
//! Uniform 1-D sample generators for the bearing film grid.
//!
//! - `periodic_points()`: samples of a periodic domain `[start, end)`. The end point is the
//!   first sample of the next period and is never generated, so the step is `(end - start)/n`.
//! - `bounded_points()`: samples of a bounded domain `[start, end]` with both end points
//!   generated, so the step is `(end - start)/(n - 1)`.
//!
//! Both return `nalgebra::DVector<f64>`.
use nalgebra::DVector;

/// Step of a periodic grid with `n` samples (end point excluded)
pub fn periodic_step(start: f64, end: f64, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    (end - start) / n as f64
}

/// Step of a bounded grid with `n` samples (both end points included).
///
/// A single-sample grid has no spacing, its step is 0.
pub fn bounded_step(start: f64, end: f64, n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    (end - start) / (n - 1) as f64
}

/// `n` evenly spaced samples over `[start, end)`
pub fn periodic_points(start: f64, end: f64, n: usize) -> DVector<f64> {
    let step = periodic_step(start, end, n);
    DVector::from_fn(n, |i, _| start + step * i as f64)
}

/// `n` evenly spaced samples over `[start, end]`
pub fn bounded_points(start: f64, end: f64, n: usize) -> DVector<f64> {
    let step = bounded_step(start, end, n);
    let mut points = DVector::from_fn(n, |i, _| start + step * i as f64);
    // pin the last sample so the upper bound is attained exactly
    if n > 1 {
        points[n - 1] = end;
    }
    points
}
