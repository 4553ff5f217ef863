//! Command-line front end: load items, run the GA, write the report.

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use knapsack_ga::catalog::Catalog;
use knapsack_ga::ga::{GaConfig, GaRunner, KnapsackProblem, Recombination};
use knapsack_ga::report;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Solve a 0/1 knapsack instance with a steady-state genetic algorithm.
#[derive(Parser, Debug)]
#[command(name = "knapsack-ga", version, about)]
struct Cli {
    /// Input file with `name weight value` triples
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for per-generation best solutions (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Knapsack capacity
    #[arg(short, long)]
    capacity: f64,

    /// Number of generations
    #[arg(short, long, default_value_t = 100)]
    generations: usize,

    /// Number of individuals in a generation
    #[arg(short = 'n', long = "population", default_value_t = 100)]
    population: usize,

    /// Per-gene mutation probability (0.0 - 1.0)
    #[arg(long, default_value_t = 0.05)]
    mutation_rate: f64,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// How offspring are built from the two parents
    #[arg(long, value_enum, default_value_t = RecombinationArg::Midpoint)]
    recombination: RecombinationArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RecombinationArg {
    Midpoint,
    SinglePoint,
}

impl From<RecombinationArg> for Recombination {
    fn from(arg: RecombinationArg) -> Self {
        match arg {
            RecombinationArg::Midpoint => Recombination::Midpoint,
            RecombinationArg::SinglePoint => Recombination::SinglePoint,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    ensure!(
        (0.0..=1.0).contains(&cli.mutation_rate),
        "mutation rate must be within [0, 1], got {}",
        cli.mutation_rate
    );

    let catalog = Catalog::from_path(&cli.input)
        .with_context(|| format!("failed to read items from {}", cli.input.display()))?;
    let problem = KnapsackProblem::new(catalog, cli.capacity)?;

    let mut config = GaConfig::default()
        .with_population_size(cli.population)
        .with_generations(cli.generations)
        .with_mutation_rate(cli.mutation_rate)
        .with_recombination(cli.recombination.into());
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut write_result = Ok(());
    let result = GaRunner::run_with_observer(&problem, &config, |generation| {
        if write_result.is_ok() {
            write_result = report::write_generation(&mut out, &problem, generation);
        }
    })?;
    write_result.context("failed to write generation report")?;

    report::write_best(&mut out, &problem, &result.best)
        .context("failed to write best solution")?;
    out.flush().context("failed to flush output")?;

    Ok(())
}
