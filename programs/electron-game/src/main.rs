//! Electron Game - console tournament
//!
//! Plays every (Q, P, Q) strategy permutation of the electron spin game
//! and prints each permutation's final score.

mod report;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use spin_logic::{run_tournament, DrawRange, Enumeration, GameConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Order {
    /// q_first = i/8 % 4, p = i % 2, q_second = i/2 % 4
    Indexed,
    /// Q first move outermost, then P, then Q second move
    Nested,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Draw {
    /// Collapse draw from 1..=10
    OneToTen,
    /// Collapse draw from 0..=9
    ZeroToNine,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the collapse draws; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = Order::Indexed)]
    enumeration: Order,
    #[arg(long, value_enum, default_value_t = Draw::OneToTen)]
    draw_range: Draw,
    /// Print the tournament as JSON instead of text
    #[arg(long)]
    json: bool,
    #[arg(long, default_value_t = log::LevelFilter::Info)]
    log_level: log::LevelFilter,
}

impl Args {
    fn config(&self) -> GameConfig {
        let enumeration = match self.enumeration {
            Order::Indexed => Enumeration::Indexed,
            Order::Nested => Enumeration::Nested,
        };
        let draw_range = match self.draw_range {
            Draw::OneToTen => DrawRange::ONE_TO_TEN,
            Draw::ZeroToNine => DrawRange::ZERO_TO_NINE,
        };
        GameConfig::standard()
            .with_enumeration(enumeration)
            .with_draw_range(draw_range)
    }
}

fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

fn clock_seed() -> anyhow::Result<u64> {
    let elapsed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("system clock is before the unix epoch")?;
    Ok(elapsed.as_nanos() as u64)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.log_level)?;

    let seed = match args.seed {
        Some(seed) => seed,
        None => clock_seed()?,
    };
    let config = args.config();
    log::info!("seed {} ({:?}, draw {:?})", seed, config.enumeration, config.draw_range);

    let result = run_tournament(&config, seed);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render_text(&result));
    }

    if !result.failures.is_empty() {
        anyhow::bail!("{} permutation(s) aborted", result.failures.len());
    }
    Ok(())
}
