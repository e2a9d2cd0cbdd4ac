mod cli;
mod day1;
mod day2;
mod day3;
mod day4;
mod day5;
mod day6;
mod day7;
mod day8;
mod error;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::error::PuzzleError;

type Solver = fn(u8, &str) -> Result<String, PuzzleError>;

const DAYS: [(Solver, &str); 8] = [
    (day1::solve, day1::EXAMPLE),
    (day2::solve, day2::EXAMPLE),
    (day3::solve, day3::EXAMPLE),
    (day4::solve, day4::EXAMPLE),
    (day5::solve, day5::EXAMPLE),
    (day6::solve, day6::EXAMPLE),
    (day7::solve, day7::EXAMPLE),
    (day8::solve, day8::EXAMPLE),
];

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (solve, example) = DAYS[cli.day as usize - 1];
    let input = if cli.example {
        example.to_owned()
    } else {
        let path = cli.input_path();
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?
    };

    let time = std::time::Instant::now();
    let answer = solve(cli.part, &input).with_context(|| format!("solving day {} part {}", cli.day, cli.part))?;
    info!(elapsed = time.elapsed().as_secs_f32(), "solved");
    println!("Result: {}", answer);
    Ok(())
}
