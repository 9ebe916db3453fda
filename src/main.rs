use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use log::info;

use growth_tracker::utils::{print_chart_summary, print_series_table};
use growth_tracker::{
    ChartSummary, GrowthConfig, GrowthSnapshot, Sex, age_group, milestones_for,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare a growth log against WHO median curves", long_about = None)]
struct Cli {
    /// Growth snapshot JSON (growthLogs, babyDOB, babyGender)
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    snapshot: PathBuf,

    /// Chart horizon in months
    #[arg(short, long)]
    months: Option<i64>,

    /// Override the recorded sex category (male/female)
    #[arg(long)]
    sex: Option<Sex>,

    /// Emit the series and summary as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Only list months with a recorded measurement
    #[arg(long, action = ArgAction::SetTrue)]
    measured_only: bool,
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = GrowthConfig::from_env();

    let months = match cli.months {
        Some(requested) => config.validate_horizon(requested)?,
        None => config.default_horizon,
    };

    let snapshot = GrowthSnapshot::load(&cli.snapshot)
        .with_context(|| format!("reading snapshot {}", cli.snapshot.display()))?;
    let sex = match cli.sex {
        Some(sex) => sex,
        None => snapshot.sex().context("reading recorded sex")?,
    };

    info!("Building {months}-month growth series ({sex})");
    let series = snapshot
        .series(&config, months, sex)
        .context("building growth series")?;
    let summary = ChartSummary::from_series(&series);

    if cli.json {
        let output = serde_json::json!({ "series": series, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_series_table(&series, cli.measured_only);
    println!();
    print_chart_summary(&summary);

    if let Some(birth) = snapshot.birth_date(&config.date_format_config)? {
        let today = chrono::Local::now().date_naive();
        let group = age_group(birth, today);
        println!("Age group today: {group}");
        for task in milestones_for(group) {
            println!("  milestone: {task}");
        }
    }

    Ok(())
}
