#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Distance Harness
//!
//! Drivers around the [`distance`] engine:
//!
//! -   **Benchmark** ([`run_benchmark`]): times configured variants on seeded
//!     sphere sets of increasing size. The timing lines are emitted through
//!     `tracing` by [`distance::Timed`].
//! -   **Validation** ([`run_validation`]): runs all six variants on one small
//!     seeded set and requires every pair of them to agree on the strict lower
//!     triangle within an absolute tolerance.
//! -   **Collision** ([`run_collision`]): lists the sphere pairs whose
//!     edge-to-edge distance is negative.
//!
//! Random placements come from a [`SphereSource`] that the caller builds
//! from an explicit seed; nothing here touches a process-wide generator.

pub mod benchmark;
pub mod collision;
pub mod config;
pub mod error;
pub mod source;
pub mod validation;

pub use benchmark::{run_benchmark, BenchmarkRecord};
pub use collision::{detect_collisions, run_collision, CollisionReport, CollisionRun};
pub use config::{
    BenchmarkConfig, BenchmarkStage, CollisionConfig, HarnessConfig, Scenario, ValidationConfig,
};
pub use error::HarnessError;
pub use source::SphereSource;
pub use validation::{
    compare_all, max_lower_triangle_diff, run_validation, ValidationReport, VariantComparison,
};
