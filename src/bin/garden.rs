use std::{
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use garden_regions::{total_price, Fence, Grid};
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

const PROBLEM_INPUT: &str = "in.txt";
const EXAMPLE_INPUT: &str = "ex.txt";
const LINE_WIDTH: usize = 50;

/// Price the fences around every region of a garden plot map.
#[derive(Debug, Parser)]
struct CliArgs {
    /// Plot map to read. Defaults to `in.txt`, or `ex.txt` with `--example`.
    input: Option<PathBuf>,
    /// Read the example input instead of the problem input.
    #[arg(short, long)]
    example: bool,
}

impl CliArgs {
    fn input_path(&self) -> PathBuf {
        match &self.input {
            Some(path) => path.clone(),
            None if self.example => PathBuf::from(EXAMPLE_INPUT),
            None => PathBuf::from(PROBLEM_INPUT),
        }
    }
}

/// Measures the time since it was started, and since the last lap.
struct Stopwatch {
    started: Instant,
    lap: Instant,
}

impl Stopwatch {
    fn start() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            lap: now,
        }
    }

    fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now - self.lap;
        self.lap = now;
        elapsed
    }

    fn total(&self) -> Duration {
        self.started.elapsed()
    }
}

fn print_line(text: &str) {
    let fill = LINE_WIDTH.saturating_sub(text.chars().count() + 5);
    println!("--- {text} {}", "-".repeat(fill));
}

fn print_answer(part: u8, answer: usize, elapsed: Duration) {
    print_line(&format!("Part {part} [- {answer} -] in [- {elapsed:.4?} -]"));
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .context("building log filter")?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;
    let args = CliArgs::parse();
    let mut stopwatch = Stopwatch::start();

    let path = args.input_path();
    info!(path = %path.display(), "reading plot map");
    let input = fs::read_to_string(&path)
        .with_context(|| format!("reading plot map from {}", path.display()))?;
    let grid: Grid<char> = input
        .parse()
        .with_context(|| format!("parsing plot map from {}", path.display()))?;
    debug!(
        width = grid.width(),
        height = grid.height(),
        "parsed plot map"
    );

    println!();
    print_line(&format!("-= {} =-", path.display()));
    stopwatch.lap();

    let by_perimeter = total_price(&grid, Fence::Perimeter, |area, perimeter| {
        area * perimeter
    });
    print_answer(1, by_perimeter, stopwatch.lap());

    let by_sides = total_price(&grid, Fence::Sides, |area, sides| area * sides);
    print_answer(2, by_sides, stopwatch.lap());

    print_line(&format!("Total Time: [- {:.4?} -]", stopwatch.total()));
    println!();

    Ok(())
}
