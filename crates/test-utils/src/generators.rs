//! Scattered sample generators.
//!
//! Each generator returns `(x, y, value)` tuples in grid-index space.

/// Samples on a ring around `(cx, cy)`, all carrying `value`.
///
/// Points are spaced evenly by angle, starting on the +x axis.
pub fn ring_samples(cx: f64, cy: f64, radius: f64, count: usize, value: f64) -> Vec<(f64, f64, f64)> {
    (0..count)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / count as f64;
            (cx + radius * theta.cos(), cy + radius * theta.sin(), value)
        })
        .collect()
}

/// Samples on a regular lattice with value `x * 1000 + y`.
///
/// Makes it easy to check which sample an exact hit returned.
pub fn lattice_samples(step: usize, width: usize, height: usize) -> Vec<(f64, f64, f64)> {
    let mut samples = Vec::new();
    for y in (0..height).step_by(step.max(1)) {
        for x in (0..width).step_by(step.max(1)) {
            samples.push((x as f64, y as f64, (x * 1000 + y) as f64));
        }
    }
    samples
}

/// Samples whose value is a linear ramp `a * x + b * y + c`.
pub fn ramp_samples(points: &[(f64, f64)], a: f64, b: f64, c: f64) -> Vec<(f64, f64, f64)> {
    points
        .iter()
        .map(|&(x, y)| (x, y, a * x + b * y + c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_samples_on_circle() {
        let samples = ring_samples(50.0, 50.0, 10.0, 8, 3.0);
        assert_eq!(samples.len(), 8);
        for (x, y, v) in samples {
            let r = ((x - 50.0).powi(2) + (y - 50.0).powi(2)).sqrt();
            assert!((r - 10.0).abs() < 1e-9);
            assert_eq!(v, 3.0);
        }
    }

    #[test]
    fn test_lattice_samples_values() {
        let samples = lattice_samples(5, 11, 6);
        assert_eq!(samples.len(), 3 * 2);
        assert!(samples.contains(&(10.0, 5.0, 10005.0)));
    }

    #[test]
    fn test_ramp_samples() {
        let samples = ramp_samples(&[(1.0, 2.0)], 2.0, 3.0, 1.0);
        assert_eq!(samples, vec![(1.0, 2.0, 9.0)]);
    }
}
