/*
 * Random Normal Module
 *
 * Standard-normal samples via the Box-Muller transform. Used to bias the
 * fractal depth of new snowflakes towards simple shapes.
 */

use rand::Rng;
use std::f32::consts::PI;

/// Draw one sample from N(0, 1) using two uniform draws from `rng`.
pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    // ln(0) is undefined, redraw until u1 is non-zero
    let mut u1: f32 = rng.gen();
    while u1 == 0.0 {
        u1 = rng.gen();
    }
    let u2: f32 = rng.gen();

    let c1 = (-2.0 * u1.ln()).sqrt();
    let c2 = (2.0 * PI * u2).cos();

    c1 * c2
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_have_zero_mean_and_unit_deviation() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 200_000;

        let samples: Vec<f64> = (0..n).map(|_| sample(&mut rng) as f64).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.02, "mean was {mean}");
        assert!((variance.sqrt() - 1.0).abs() < 0.02, "std dev was {}", variance.sqrt());
    }

    #[test]
    fn samples_are_finite() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!((0..10_000).all(|_| sample(&mut rng).is_finite()));
    }
}
