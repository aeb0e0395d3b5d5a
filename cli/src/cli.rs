use std::path::PathBuf;

use automap::FairnessPreset;

/// Starting-map generator for redistricting
#[derive(clap::Parser, Debug)]
#[command(name = "automap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a districting plan from a precinct GeoJSON file
    Generate(GenerateArgs),

    /// Recompute metrics for a stored plan
    Metrics(MetricsArgs),
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Precinct FeatureCollection (GeoJSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub geojson: PathBuf,

    /// Number of districts
    #[arg(short, long)]
    pub districts: u32,

    /// Fairness preset: very_r, lean_r, fair, lean_d, very_d
    #[arg(short, long, default_value_t = FairnessPreset::Fair)]
    pub preset: FairnessPreset,

    /// Custom target Democratic share in [0, 1], overriding the preset
    #[arg(short, long)]
    pub target: Option<f64>,

    /// State code stored in the plan document, e.g. PA
    #[arg(short, long, default_value = "")]
    pub state: String,

    /// Plan name, defaults to "Automap - <preset label>"
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output plan file, defaults to "./plan.json"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct MetricsArgs {
    /// Precinct FeatureCollection (GeoJSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub geojson: PathBuf,

    /// Plan document written by `automap generate`
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub plan: PathBuf,
}
