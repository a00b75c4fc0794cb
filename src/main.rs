use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use bodyfit::engine::{morph, ticks};
use bodyfit::{
    EngineConfig, FitSession, Gender, MeasurementType, ReferenceRepository, SizingEngine,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Body measurement estimates and slider ranges", long_about = None)]
struct Cli {
    /// Engine configuration (JSON); defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Male reference table (CSV); the embedded table is used when omitted
    #[arg(long, global = true, requires = "female_table")]
    male_table: Option<PathBuf>,

    /// Female reference table (CSV)
    #[arg(long, global = true, requires = "male_table")]
    female_table: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate chest/waist/hips
    Estimate(BodyArgs),
    /// Adaptive slider range for one measurement
    Range {
        #[command(flatten)]
        body: BodyArgs,
        /// height, weight, chest, waist or hips
        #[arg(short, long)]
        measurement: MeasurementType,
    },
    /// Tick scale around a baseline within a domain
    Ticks {
        #[arg(long)]
        baseline: f64,
        #[arg(long)]
        min: f64,
        #[arg(long)]
        max: f64,
        #[arg(long, default_value_t = ticks::DEFAULT_STEP_COUNT)]
        steps: u32,
    },
    /// Morph weight for a live value against its baseline
    Morph {
        #[arg(long, allow_hyphen_values = true)]
        current: f64,
        #[arg(long, allow_hyphen_values = true)]
        baseline: f64,
        #[arg(long, default_value_t = morph::DEFAULT_FACTOR)]
        factor: f64,
    },
    /// Every slider plus morph weights for a profile
    Profile(BodyArgs),
}

#[derive(Args, Debug)]
struct BodyArgs {
    /// Height in cm; the configured default is used when omitted
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kg; the configured default is used when omitted
    #[arg(long)]
    weight: Option<f64>,

    /// male, female, or anything else for the formula estimate
    #[arg(long, default_value = "other")]
    gender: String,
}

#[derive(Serialize)]
struct ProfileReport {
    height: f64,
    weight: f64,
    gender: Gender,
    sliders: Vec<bodyfit::SliderState>,
    morph: bodyfit::MorphFrame,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let repository = match (&cli.male_table, &cli.female_table) {
        (Some(male), Some(female)) => ReferenceRepository::from_files(male, female)?,
        _ => ReferenceRepository::embedded(),
    };
    let engine = SizingEngine::new(repository, config);

    match cli.command {
        Command::Estimate(body) => {
            let (height, weight) = engine.sanitize_inputs(body.height, body.weight);
            print_json(&engine.estimate(height, weight, Gender::parse(&body.gender)))
        }
        Command::Range { body, measurement } => {
            let (height, weight) = engine.sanitize_inputs(body.height, body.weight);
            let bounds =
                engine.adaptive_range(measurement, height, weight, Gender::parse(&body.gender));
            print_json(&bounds)
        }
        Command::Ticks {
            baseline,
            min,
            max,
            steps,
        } => print_json(&ticks::generate_ticks(baseline, min, max, steps)),
        Command::Morph {
            current,
            baseline,
            factor,
        } => print_json(&morph::normalize(current, baseline, factor)),
        Command::Profile(body) => {
            let mut session = FitSession::new(&engine);
            session.set_profile(body.height, body.weight, Gender::parse(&body.gender));
            let (height, weight) = session.body();
            let sliders = MeasurementType::ALL
                .into_iter()
                .map(|m| session.slider(m))
                .collect();
            print_json(&ProfileReport {
                height,
                weight,
                gender: session.gender(),
                sliders,
                morph: session.morph_frame(),
            })
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialising output")?;
    println!("{text}");
    Ok(())
}
