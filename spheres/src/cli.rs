use clap::{Args, Parser, Subcommand};
use distance::Variant;
use harness::Scenario;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spheres", version, about = "Pairwise sphere distances: benchmark, validate, collide")]
pub struct Cli {
    /// JSON configuration file. Sections it leaves out keep their defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Time the configured variants on seeded sphere sets.
    Bench(BenchArgs),
    /// Run all six variants and check that they agree.
    Validate(ValidateArgs),
    /// Compute one distance matrix and list overlapping spheres.
    Collide(CollideArgs),
}

#[derive(Args, Debug, Default)]
pub struct BenchArgs {
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub radius: Option<f64>,
    #[arg(long)]
    pub domain_size: Option<f64>,
}

/// Overrides for a seeded [`Scenario`].
#[derive(Args, Debug, Default)]
pub struct ScenarioArgs {
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub num_spheres: Option<usize>,
    #[arg(long)]
    pub radius: Option<f64>,
    #[arg(long)]
    pub domain_size: Option<f64>,
}

impl ScenarioArgs {
    pub fn apply(&self, scenario: &mut Scenario) {
        if let Some(seed) = self.seed {
            scenario.seed = seed;
        }
        if let Some(num_spheres) = self.num_spheres {
            scenario.num_spheres = num_spheres;
        }
        if let Some(radius) = self.radius {
            scenario.radius = radius;
        }
        if let Some(domain_size) = self.domain_size {
            scenario.domain_size = domain_size;
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,
    /// Largest accepted absolute difference on the strict lower triangle.
    #[arg(long)]
    pub tolerance: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub struct CollideArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,
    /// Variant used for the distance matrix, by number (1-6) or name.
    #[arg(long)]
    pub variant: Option<Variant>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn collide_accepts_variant_numbers_and_names() {
        let cli = Cli::parse_from(["spheres", "collide", "--variant", "2", "--seed", "9"]);
        match cli.command {
            Command::Collide(args) => {
                assert_eq!(args.variant, Some(Variant::TriangularLoop));
                assert_eq!(args.scenario.seed, Some(9));
            }
            other => panic!("parsed {other:?}"),
        }

        let cli = Cli::parse_from(["spheres", "collide", "--variant", "row_full"]);
        assert!(matches!(
            cli.command,
            Command::Collide(CollideArgs { variant: Some(Variant::RowFull), .. })
        ));
    }

    #[test]
    fn unknown_variant_is_a_usage_error() {
        assert!(Cli::try_parse_from(["spheres", "collide", "--variant", "9"]).is_err());
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::parse_from(["spheres", "validate", "--config", "plan.json", "-v"]);
        assert_eq!(cli.config, Some(PathBuf::from("plan.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn scenario_overrides_only_touch_given_fields() {
        let mut scenario = Scenario::default();
        ScenarioArgs {
            num_spheres: Some(12),
            radius: Some(0.25),
            ..ScenarioArgs::default()
        }
        .apply(&mut scenario);
        assert_eq!(scenario.num_spheres, 12);
        assert_eq!(scenario.radius, 0.25);
        assert_eq!(scenario.seed, Scenario::default().seed);
        assert_eq!(scenario.domain_size, Scenario::default().domain_size);
    }
}
