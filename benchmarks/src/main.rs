use std::collections::BTreeSet;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use pi_bench::{Algorithm, DecimalContext, Rounding, SuiteConfig, TimerOptions, run_suite};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Compute pi with several series and compare how long each takes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Algorithms to run, by name or index (0-based). Runs all when omitted.
    algorithms: Vec<String>,

    /// Iterations (series terms, or AGM steps) per computation.
    #[arg(short, long, default_value_t = 1000, allow_negative_numbers = true)]
    depth: i64,

    /// Significant decimal digits kept by every operation.
    #[arg(short, long, default_value_t = pi_bench::decimal::DEFAULT_PRECISION)]
    precision: u32,

    /// Rounding mode for every operation.
    #[arg(long, value_enum, default_value_t = RoundingArg::HalfEven)]
    rounding: RoundingArg,

    /// Calls per timed batch.
    #[arg(long, default_value_t = 3)]
    reps: usize,

    /// Independent batches; the fastest is reported.
    #[arg(long, default_value_t = 1)]
    reps1: usize,

    /// Untimed calls before measuring.
    #[arg(long, default_value_t = 0)]
    warmup: usize,

    /// Run different algorithms on separate threads.
    #[arg(long)]
    parallel: bool,

    /// List available algorithms and exit.
    #[arg(short, long)]
    list: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RoundingArg {
    HalfEven,
    HalfUp,
    Down,
    Up,
    Floor,
    Ceiling,
}

impl From<RoundingArg> for Rounding {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::HalfEven => Rounding::HalfEven,
            RoundingArg::HalfUp => Rounding::HalfUp,
            RoundingArg::Down => Rounding::Down,
            RoundingArg::Up => Rounding::Up,
            RoundingArg::Floor => Rounding::Floor,
            RoundingArg::Ceiling => Rounding::Ceiling,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_algorithm_list() {
    println!("Available algorithms:");
    for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
        println!("  {}: {:<12} {}", i, algorithm.name(), algorithm.description());
    }
}

/// Resolves names or indices, keeping the canonical order and skipping unknowns.
fn parse_algorithm_selection(args: &[String]) -> Vec<Algorithm> {
    let mut selected = BTreeSet::new();

    for arg in args {
        if let Ok(index) = arg.parse::<usize>() {
            if index < Algorithm::ALL.len() {
                selected.insert(index);
            } else {
                warn!(
                    "algorithm index {} out of range (0-{})",
                    index,
                    Algorithm::ALL.len() - 1
                );
            }
        } else {
            match Algorithm::from_str(arg) {
                Ok(algorithm) => {
                    if let Some(index) = Algorithm::ALL.iter().position(|a| *a == algorithm) {
                        selected.insert(index);
                    }
                }
                Err(err) => warn!("{err}"),
            }
        }
    }

    selected.into_iter().map(|i| Algorithm::ALL[i]).collect()
}

fn build_config(cli: &Cli) -> Result<SuiteConfig> {
    let algorithms = if cli.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        parse_algorithm_selection(&cli.algorithms)
    };
    if algorithms.is_empty() {
        bail!("no valid algorithms selected; use --list to see available algorithms");
    }

    let context = DecimalContext::new(cli.precision, cli.rounding.into())
        .context("invalid --precision")?;
    let timer = TimerOptions::new(cli.reps, 1, cli.reps1)
        .context("invalid repetition counts")?
        .with_warmup(cli.warmup);

    Ok(SuiteConfig {
        depth: cli.depth,
        context,
        algorithms,
        timer,
        parallel: cli.parallel,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        print_algorithm_list();
        return Ok(());
    }

    let config = build_config(&cli)?;
    let entries = run_suite(&config).context("benchmark run failed")?;

    for entry in &entries {
        println!(
            "({}, {:?}, {})",
            entry.algorithm.name(),
            entry.elapsed,
            entry.result
        );
        println!("  correct digits: {}", entry.correct_digits);
    }

    Ok(())
}
