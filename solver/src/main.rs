use std::num::NonZero;
use std::path::PathBuf;
use std::thread;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::warn;
use rivercross::{Count, Puzzle, Report, StateSpace};

use playback::{Phase, Playback};

mod playback;

/// Solve the missionaries and cannibals river-crossing puzzle and play the crossings back.
#[derive(Parser)]
#[command(name = "solver", about = "Solve the missionaries and cannibals river-crossing puzzle")]
struct Cli {
    /// Missionaries starting on the left bank; negative values count as zero
    #[arg(default_value_t = 3, allow_negative_numbers = true)]
    missionaries: i64,

    /// Cannibals starting on the left bank; negative values count as zero
    #[arg(default_value_t = 3, allow_negative_numbers = true)]
    cannibals: i64,

    /// Seats in the boat
    #[arg(long, default_value = "2")]
    capacity: NonZero<usize>,

    /// Where to save the solution
    #[arg(long, default_value = "results.txt")]
    output: PathBuf,

    /// Steps shown per second, between 0.5 and 10
    #[arg(long, default_value_t = 1.0)]
    speed: f32,

    /// Print every step immediately
    #[arg(long)]
    instant: bool,

    /// Also report the size of the state space and the fewest crossings possible
    #[arg(long)]
    explore: bool,
}

fn clamp_count(name: &str, value: i64) -> Count {
    Count::try_from(value).unwrap_or_else(|_| {
        warn!("{name} cannot be {value}; using 0");
        0
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let puzzle = Puzzle::new(
        clamp_count("missionaries", cli.missionaries),
        clamp_count("cannibals", cli.cannibals),
        cli.capacity,
    );
    println!(
        "Missionaries: {}, Cannibals: {}, Boat capacity: {}",
        puzzle.missionaries(),
        puzzle.cannibals(),
        puzzle.capacity(),
    );

    let mut playback = Playback::new(cli.speed);
    playback.submit(puzzle.solve());

    if cli.explore {
        let space = StateSpace::explore(&puzzle);
        println!("Reachable configurations: {}", space.len());
        match space.minimum_crossings() {
            Some(crossings) => println!("Fewest crossings possible: {crossings}"),
            None => println!("The goal cannot be reached"),
        }
    }

    while let Some(frame) = playback.advance() {
        println!("{frame}");
        if !cli.instant && playback.phase() != Phase::Solved {
            thread::sleep(playback.step_delay());
        }
    }

    match playback.phase() {
        Phase::Solved => {
            let report = Report::new(&puzzle, playback.solution())
                .context("solved puzzle has no report")?;
            report.write_to(&cli.output)
                .with_context(|| format!("saving results to {}", cli.output.display()))?;
            println!("Solved in {} crossings. Results saved in {}", playback.solution().crossings(), cli.output.display());
        }
        Phase::Unsolvable => {
            if !puzzle.is_valid(&puzzle.initial()) {
                println!("No solution: the missionaries are outnumbered before anyone crosses");
            } else {
                println!("No solution: every reachable configuration was tried");
            }
        }
        phase => bail!("playback stopped in unexpected phase {phase:?}"),
    }

    Ok(())
}
