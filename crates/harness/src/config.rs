//! Driver configuration.
//!
//! Every section deserialises with `#[serde(default)]`, so a JSON file only
//! needs the values it changes:
//!
//! ```json
//! {
//!   "validation": { "tolerance": 1e-9 },
//!   "collision": { "variant": "full_loop" }
//! }
//! ```

use crate::{HarnessError, SphereSource};
use distance::{SphereSet, Variant};
use serde::{Deserialize, Serialize};

/// A seeded random placement of spheres inside a cube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub radius: f64,
    pub domain_size: f64,
    pub num_spheres: usize,
    pub seed: u64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            radius: 1.0,
            domain_size: 5.0,
            num_spheres: 5,
            seed: 1,
        }
    }
}

impl Scenario {
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for a negative or non-finite
    /// radius, or a domain size that is not a positive finite number.
    pub fn validate(&self) -> Result<(), HarnessError> {
        check_geometry(self.radius, self.domain_size)
    }

    /// Draws the scenario's spheres from a fresh [`SphereSource`].
    #[must_use]
    pub fn spheres(&self) -> SphereSet {
        SphereSource::new(self.seed).sphere_set(self.num_spheres, self.domain_size, self.radius)
    }
}

fn check_geometry(radius: f64, domain_size: f64) -> Result<(), HarnessError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(HarnessError::InvalidConfig(format!(
            "radius must be a non-negative finite number, got {radius}"
        )));
    }
    if !domain_size.is_finite() || domain_size <= 0.0 {
        return Err(HarnessError::InvalidConfig(format!(
            "domain_size must be a positive finite number, got {domain_size}"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkStage {
    pub num_spheres: usize,
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub radius: f64,
    pub domain_size: f64,
    /// Re-applied at the start of every stage.
    pub seed: u64,
    pub stages: Vec<BenchmarkStage>,
}

impl Default for BenchmarkConfig {
    /// Scalar loops against the first bulk variant at 1000 spheres, then the
    /// bulk variants against each other at 3000.
    fn default() -> Self {
        Self {
            radius: 1.0,
            domain_size: 50.0,
            seed: 1,
            stages: vec![
                BenchmarkStage {
                    num_spheres: 1000,
                    variants: vec![Variant::FullLoop, Variant::TriangularLoop, Variant::RowFull],
                },
                BenchmarkStage {
                    num_spheres: 3000,
                    variants: vec![
                        Variant::RowFull,
                        Variant::RowDeferredSqrt,
                        Variant::RowTriangular,
                        Variant::RowTriangularPowf,
                    ],
                },
            ],
        }
    }
}

impl BenchmarkConfig {
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for bad geometry, an empty
    /// plan, or a stage without variants.
    pub fn validate(&self) -> Result<(), HarnessError> {
        check_geometry(self.radius, self.domain_size)?;
        if self.stages.is_empty() {
            return Err(HarnessError::InvalidConfig(
                "benchmark plan has no stages".to_owned(),
            ));
        }
        if let Some(stage) = self.stages.iter().find(|s| s.variants.is_empty()) {
            return Err(HarnessError::InvalidConfig(format!(
                "benchmark stage with {} spheres lists no variants",
                stage.num_spheres
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub scenario: Scenario,
    /// Largest accepted absolute difference between two variants.
    pub tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::default(),
            tolerance: 1e-6,
        }
    }
}

impl ValidationConfig {
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for bad geometry or a
    /// tolerance that is not a positive finite number.
    pub fn validate(&self) -> Result<(), HarnessError> {
        self.scenario.validate()?;
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(HarnessError::InvalidConfig(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    pub scenario: Scenario,
    pub variant: Variant,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario {
                domain_size: 4.0,
                ..Scenario::default()
            },
            variant: Variant::RowTriangular,
        }
    }
}

impl CollisionConfig {
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for bad geometry.
    pub fn validate(&self) -> Result<(), HarnessError> {
        self.scenario.validate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub benchmark: BenchmarkConfig,
    pub validation: ValidationConfig,
    pub collision: CollisionConfig,
}

impl HarnessConfig {
    /// Parses a JSON document and checks every section.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::ConfigParse`] for malformed JSON and
    /// [`HarnessError::InvalidConfig`] when a section fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, HarnessError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the first section's validation error.
    pub fn validate(&self) -> Result<(), HarnessError> {
        self.benchmark.validate()?;
        self.validation.validate()?;
        self.collision.validate()
    }
}
