use crate::{BenchmarkConfig, HarnessError, SphereSource};
use distance::{Timed, Variant};
use std::time::Duration;

/// One timed variant run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub variant: Variant,
    pub num_spheres: usize,
    pub elapsed: Duration,
}

/// Runs every stage of the plan, timing each listed variant.
///
/// Each stage redraws its spheres from a source seeded with `config.seed`,
/// so a variant listed in two stages sees the same leading coordinates. The
/// matrices themselves are dropped once timed.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidConfig`] for an invalid plan, or the
/// first engine error.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<Vec<BenchmarkRecord>, HarnessError> {
    config.validate()?;

    let mut records = Vec::new();
    for stage in &config.stages {
        tracing::info!("Benchmarking with {} particles.", stage.num_spheres);
        let spheres = SphereSource::new(config.seed).sphere_set(
            stage.num_spheres,
            config.domain_size,
            config.radius,
        );
        for &variant in &stage.variants {
            let (_, elapsed) = Timed::new(variant).distances_timed(&spheres)?;
            records.push(BenchmarkRecord {
                variant,
                num_spheres: stage.num_spheres,
                elapsed,
            });
        }
    }
    Ok(records)
}
