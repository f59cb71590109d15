use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Normal};

/// Source of multiplicative noise factors centered at 1.0.
///
/// Generators never touch an RNG directly; they ask the injected source for a
/// factor at their own standard deviation. Substituting [`ZeroNoise`] reduces
/// every value to the closed-form growth/cyclical formula.
pub trait NoiseSource {
    /// Draw one factor around 1.0 with the given standard deviation.
    fn factor(&mut self, std_dev: f64) -> f64;
}

/// Gaussian noise over any [`RngCore`].
pub struct GaussianNoise<R: RngCore> {
    rng: R,
}

impl GaussianNoise<SmallRng> {
    /// OS-entropy source; two runs draw different factors.
    pub fn from_entropy() -> Self {
        Self { rng: SmallRng::from_os_rng() }
    }

    /// Seeded source; two runs with the same seed draw identical factors.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl<R: RngCore> GaussianNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> NoiseSource for GaussianNoise<R> {
    fn factor(&mut self, std_dev: f64) -> f64 {
        // Per-indicator deviations are compile-time constants in (0, 1).
        let normal = Normal::new(1.0, std_dev).expect("noise std dev must be finite and non-negative");
        normal.sample(&mut self.rng)
    }
}

/// Always returns 1.0, exposing the deterministic formula to tests.
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn factor(&mut self, _std_dev: f64) -> f64 {
        1.0
    }
}
