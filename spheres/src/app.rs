//! Driver dispatch and result printing.
//!
//! Configuration is layered: built-in defaults, then the optional JSON file,
//! then command-line flags. Each driver validates its final configuration
//! before doing any work.

use crate::cli::{BenchArgs, Cli, CollideArgs, Command, ValidateArgs};
use anyhow::{Context, Result};
use harness::{
    run_benchmark, run_collision, run_validation, BenchmarkConfig, BenchmarkRecord,
    CollisionConfig, CollisionRun, HarnessConfig, ValidationConfig, ValidationReport,
};
use std::io::{self, Write};
use std::path::Path;

/// Runs the selected driver and writes its results to standard output.
///
/// # Errors
///
/// Returns configuration, engine and tolerance errors from the harness, and
/// I/O errors from reading the config file or writing the output.
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Bench(args) => {
            let config = bench_config(config.benchmark, &args);
            let records = run_benchmark(&config).context("benchmark failed")?;
            render_benchmark(&records, &mut out)?;
        }
        Command::Validate(args) => {
            let config = validate_config(config.validation, &args);
            let report = run_validation(&config).context("validation failed")?;
            render_validation(&report, &mut out)?;
        }
        Command::Collide(args) => {
            let config = collide_config(config.collision, &args);
            let run = run_collision(&config).context("collision scan failed")?;
            render_collision(&run, &mut out)?;
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<HarnessConfig> {
    let Some(path) = path else {
        return Ok(HarnessConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = HarnessConfig::from_json_str(&json)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    tracing::info!("Loaded configuration from {}", path.display());
    Ok(config)
}

fn bench_config(mut config: BenchmarkConfig, args: &BenchArgs) -> BenchmarkConfig {
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(radius) = args.radius {
        config.radius = radius;
    }
    if let Some(domain_size) = args.domain_size {
        config.domain_size = domain_size;
    }
    config
}

fn validate_config(mut config: ValidationConfig, args: &ValidateArgs) -> ValidationConfig {
    args.scenario.apply(&mut config.scenario);
    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    config
}

fn collide_config(mut config: CollisionConfig, args: &CollideArgs) -> CollisionConfig {
    args.scenario.apply(&mut config.scenario);
    if let Some(variant) = args.variant {
        config.variant = variant;
    }
    config
}

fn render_benchmark(records: &[BenchmarkRecord], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{:>8}  {:<22}  {:>12}", "spheres", "variant", "seconds")?;
    for record in records {
        writeln!(
            out,
            "{:>8}  {:<22}  {:>12.6}",
            record.num_spheres,
            record.variant.name(),
            record.elapsed.as_secs_f64()
        )?;
    }
    Ok(())
}

fn render_validation(report: &ValidationReport, out: &mut impl Write) -> io::Result<()> {
    for (variant, d) in &report.matrices {
        writeln!(out, "{} ({}):", variant.index(), variant.name())?;
        writeln!(out, "{d:.6}")?;
    }
    writeln!(out, "Maximum strict-lower-triangle differences:")?;
    for comparison in &report.comparisons {
        writeln!(
            out,
            "  {} vs {}: {:e}",
            comparison.first, comparison.second, comparison.max_abs_diff
        )?;
    }
    writeln!(
        out,
        "All {} variant pairs agree within {:e}.",
        report.comparisons.len(),
        report.tolerance
    )
}

fn render_collision(run: &CollisionRun, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Distances ({}):", run.variant.name())?;
    writeln!(out, "{:.6}", run.distances)?;
    writeln!(out, "Overlaps:")?;
    writeln!(out, "{}", run.report.overlaps)?;
    writeln!(out, "Collision pairs: {:?}", run.report.pairs)
}
