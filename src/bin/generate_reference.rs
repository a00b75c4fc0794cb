use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(about = "Write a synthetic reference table to stdout")]
struct Cli {
    #[arg(value_enum, default_value_t = Table::Male)]
    table: Table,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Table {
    Male,
    Female,
}

/// One output row, in the column order the loader expects.
#[derive(Serialize)]
struct Row {
    height: f64,
    weight: f64,
    chest: f64,
    waist: f64,
    hips: f64,
    inseam: f64,
}

/// Linear body model: coefficients on height and weight plus an offset.
struct Model {
    chest: (f64, f64, f64),
    waist: (f64, f64, f64),
    hips: (f64, f64, f64),
    inseam: (f64, f64),
}

const MALE: Model = Model {
    chest: (0.25, 0.55, 11.0),
    waist: (0.10, 0.75, 7.0),
    hips: (0.30, 0.45, 12.0),
    inseam: (0.45, 0.0),
};

const FEMALE: Model = Model {
    chest: (0.22, 0.60, 15.0),
    waist: (0.08, 0.70, 16.0),
    hips: (0.25, 0.60, 20.0),
    inseam: (0.45, -1.5),
};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[-spread, spread)`.
    fn jitter(&mut self, spread: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        (unit * 2.0 - 1.0) * spread
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn generate(model: &Model, heights: &[u32], weights: &[u32], rng: &mut SimpleRng) -> Vec<Row> {
    let mut rows = Vec::new();
    for &h in heights {
        for &w in weights {
            let (h, w) = (f64::from(h), f64::from(w));
            let bmi = w / (h / 100.0).powi(2);
            if !(15.5..=42.0).contains(&bmi) {
                continue;
            }
            let lin = |(a, b, c): (f64, f64, f64)| a * h + b * w + c;
            rows.push(Row {
                height: h,
                weight: w,
                chest: round1(lin(model.chest) + rng.jitter(1.2)),
                waist: round1(lin(model.waist) + rng.jitter(1.2)),
                hips: round1(lin(model.hips) + rng.jitter(1.2)),
                inseam: round1(model.inseam.0 * h + model.inseam.1 + rng.jitter(0.8)),
            });
        }
    }
    rows
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng = SimpleRng::new(cli.seed);
    let rows = match cli.table {
        Table::Female => {
            let heights: Vec<u32> = (145..=190).step_by(5).collect();
            let weights: Vec<u32> = (40..=110).step_by(5).collect();
            generate(&FEMALE, &heights, &weights, &mut rng)
        }
        Table::Male => {
            let heights: Vec<u32> = (155..=205).step_by(5).collect();
            let weights: Vec<u32> = (50..=130).step_by(5).collect();
            generate(&MALE, &heights, &weights, &mut rng)
        }
    };

    let mut writer = csv::Writer::from_writer(io::stdout());
    for row in &rows {
        writer.serialize(row).context("writing row")?;
    }
    writer.flush().context("flushing output")?;

    log::info!("wrote {} {:?} rows (seed {})", rows.len(), cli.table, cli.seed);
    Ok(())
}
