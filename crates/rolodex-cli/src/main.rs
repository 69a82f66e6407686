mod commands;
mod error;
mod repl;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use rolodex_config as config;
use rolodex_core::rules::{validate_window_days, PastBirthdayPolicy, WindowBound};
use rolodex_core::Directory;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, Context};
use crate::error::{exit_code_for, report_error};
use crate::util::parse_reference_date;

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "rolodex contact book")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Reference date for birthday checks (DD.MM.YYYY); defaults to the local date
    #[arg(long, global = true, value_name = "DATE")]
    today: Option<String>,
    #[arg(long, global = true)]
    window_days: Option<i64>,
    /// Leave out birthdays that fall exactly on the last day of the window
    #[arg(long, global = true)]
    exclusive_bound: bool,
    /// Carry birthdays that already passed this year over to next year
    #[arg(long, global = true)]
    roll_over: bool,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read assistant commands from stdin (default)
    Repl,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        today,
        window_days,
        exclusive_bound,
        roll_over,
        json,
        verbose,
        command,
    } = cli;

    match command.unwrap_or(Command::Repl) {
        Command::Completions(args) => completions::emit(args),
        Command::Repl => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let mut window = app_config.birthdays;
            if let Some(days) = window_days {
                window.days = validate_window_days(days)?;
            }
            if exclusive_bound {
                window.bound = WindowBound::Exclusive;
            }
            if roll_over {
                window.past = PastBirthdayPolicy::RollOver;
            }
            debug!(
                days = window.days,
                bound = ?window.bound,
                past = ?window.past,
                "birthday window"
            );

            let today = today
                .as_deref()
                .map(parse_reference_date)
                .transpose()
                .with_context(|| "parse --today")?;

            let ctx = Context {
                json,
                window,
                reject_future_birthdays: app_config.reject_future_birthdays,
                today,
            };
            let mut book = Directory::new();
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            repl::run(&ctx, &mut book, stdin, stdout)
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
