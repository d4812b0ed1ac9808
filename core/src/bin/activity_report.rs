use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use activity_analytics_core::cli::{load_records, print_analysis_report};
use activity_analytics_core::{analyze_activity, load_config};

#[derive(Parser)]
#[command(name = "activity-report")]
#[command(about = "Best efforts, MMP curve and power distribution for an activity file")]
struct Cli {
    /// Records as JSON array or CSV with header
    records: PathBuf,

    /// Athlete weight in kg (enables W/kg)
    #[arg(long)]
    weight: Option<f64>,

    /// Histogram bin size in watts
    #[arg(long)]
    bin_size: Option<u32>,

    /// JSON config file (missing file => defaults)
    #[arg(long, default_value = "analysis_config.json")]
    config: PathBuf,

    /// Print the combined analysis as JSON instead of a text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?
        .with_env_overrides();
    if let Some(w) = cli.weight {
        config.athlete_weight_kg = Some(w);
    }
    if let Some(b) = cli.bin_size {
        config.bin_size = b;
    }
    config.validate()?;

    let records = load_records(&cli.records)
        .with_context(|| format!("failed to read records from {}", cli.records.display()))?;

    let analysis = analyze_activity(
        &records,
        config.athlete_weight_kg,
        config.bin_size,
        &config.mmp_durations,
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis_report(&analysis);
    }
    Ok(())
}
