use distance::SphereSet;
use ndarray::Array1;

/// Deterministic source of sphere placements.
///
/// Owns its generator; two sources built from the same seed and asked for
/// the same sequence of draws produce bit-identical coordinates.
pub struct SphereSource {
    rng: fastrand::Rng,
    seed: u64,
}

impl SphereSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// `n` values drawn uniformly from `[0, domain_size)`.
    pub fn uniform(&mut self, n: usize, domain_size: f64) -> Array1<f64> {
        (0..n).map(|_| self.rng.f64() * domain_size).collect()
    }

    /// Draws all x coordinates, then all y, then all z.
    pub fn sphere_set(&mut self, n: usize, domain_size: f64, radius: f64) -> SphereSet {
        let x = self.uniform(n, domain_size);
        let y = self.uniform(n, domain_size);
        let z = self.uniform(n, domain_size);
        SphereSet::new(x, y, z, radius)
    }
}
