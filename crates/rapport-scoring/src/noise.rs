use rand_distr::{Distribution, Normal};

/// Source of zero-mean perturbation applied to rubric scores.
pub trait NoiseSource: Send + Sync {
    /// Draw one value with standard deviation `sigma`.
    fn sample(&self, sigma: f64) -> f64;
}

/// Gaussian noise from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalNoise;

impl NoiseSource for NormalNoise {
    fn sample(&self, sigma: f64) -> f64 {
        match Normal::new(0.0, sigma) {
            Ok(normal) => normal.sample(&mut rand::thread_rng()),
            Err(e) => {
                tracing::warn!(sigma, error = %e, "invalid noise sigma, skipping perturbation");
                0.0
            }
        }
    }
}

/// No perturbation. Makes synthesis deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn sample(&self, _sigma: f64) -> f64 {
        0.0
    }
}

/// Always draws `z` standard deviations.
#[derive(Debug, Clone, Copy)]
pub struct FixedNoise(pub f64);

impl NoiseSource for FixedNoise {
    fn sample(&self, sigma: f64) -> f64 {
        self.0 * sigma
    }
}
