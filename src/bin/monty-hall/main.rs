mod terminal;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use monty_hall::config::{GameConfig, DEFAULT_DOOR_COUNT};
use monty_hall::game::{GameEngine, Mode, SimulationReport, Strategy};

use terminal::TerminalPresenter;

/// Environment variable consulted when `--seed` is not given.
const SEED_ENV: &str = "MONTY_HALL_SEED";

#[derive(Debug, Parser)]
#[command(name = "monty-hall", version)]
#[command(about = "Play the Monty Hall puzzle or simulate the keep and switch strategies")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a batch of trials with one strategy
    Simulate {
        /// Number of trials to run
        #[arg(long, default_value_t = 1000)]
        trials: u64,

        /// keep or switch
        #[arg(long, default_value = "switch")]
        strategy: Strategy,

        #[command(flatten)]
        game: GameArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the same number of trials with both strategies
    Compare {
        /// Number of trials to run per strategy
        #[arg(long, default_value_t = 1000)]
        trials: u64,

        #[command(flatten)]
        game: GameArgs,

        /// Print both reports as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play interactively in the terminal
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[derive(Debug, clap::Args)]
struct GameArgs {
    /// Number of doors
    #[arg(long, default_value_t = DEFAULT_DOOR_COUNT)]
    doors: usize,

    /// RNG seed (falls back to MONTY_HALL_SEED, then entropy)
    #[arg(long)]
    seed: Option<u64>,
}

impl GameArgs {
    fn config(&self, mode: Mode) -> Result<GameConfig> {
        let mut config = GameConfig::new().with_doors(self.doors).with_mode(mode);
        if let Some(seed) = self.seed.map(Ok).or_else(seed_from_env).transpose()? {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

fn seed_from_env() -> Option<Result<u64>> {
    let raw = std::env::var(SEED_ENV).ok()?;
    Some(
        raw.trim()
            .parse()
            .with_context(|| format!("{SEED_ENV}={raw} is not a valid seed")),
    )
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Simulate {
            trials,
            strategy,
            game,
            json,
        } => {
            let mut engine = GameEngine::headless(game.config(Mode::Simulate)?)
                .context("failed to set up the game")?;
            let report = engine
                .run_batch(trials, strategy)
                .context("simulation failed")?;
            print_reports(&[report], engine.seed(), json)
        }
        Command::Compare {
            trials,
            game,
            json,
        } => {
            let mut engine = GameEngine::headless(game.config(Mode::Simulate)?)
                .context("failed to set up the game")?;
            let reports = Strategy::ALL
                .into_iter()
                .map(|strategy| engine.run_batch(trials, strategy))
                .collect::<Result<Vec<_>, _>>()
                .context("simulation failed")?;
            print_reports(&reports, engine.seed(), json)
        }
        Command::Play { game } => {
            let config = game.config(Mode::Play)?;
            terminal::print_intro(config.door_count);
            let engine = GameEngine::new(config, TerminalPresenter::stdout())
                .context("failed to set up the game")?;
            terminal::run(engine)
        }
    }
}

fn print_reports(reports: &[SimulationReport], seed: u64, json: bool) -> Result<()> {
    if json {
        let body = serde_json::json!({ "seed": seed, "reports": reports });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", "🚪 Monty Hall simulation".bright_cyan().bold());
    println!("{}", format!("seed {seed}").dimmed());
    for report in reports {
        let bar = progress_bar(report.win_percent);
        println!(
            "{:>6}  {} {:>3}% win  {:>3}% lose  ({} of {} trials won, rate {:.3})",
            report.strategy.to_string().bold(),
            bar,
            report.win_percent,
            report.lose_percent,
            report.wins,
            report.trials,
            report.win_rate()
        );
    }
    Ok(())
}

fn progress_bar(percent: u32) -> String {
    const WIDTH: u32 = 20;
    let filled = (percent.min(100) * WIDTH / 100) as usize;
    let empty = WIDTH as usize - filled;
    format!("{}{}", "█".repeat(filled).green(), "░".repeat(empty).dimmed())
}
