mod commands;
mod config;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::example::ExampleArgs;
use commands::payment::PaymentArgs;
use commands::savings::SavingsArgs;

/// Assumable-mortgage savings calculator
#[derive(Parser)]
#[command(
    name = "assume",
    version,
    about = "Compare assuming a low-rate mortgage against a new loan at market rates",
    long_about = "Amortizes an assumable loan (plus an optional second mortgage covering \
                  the equity gap) and a new 30-year mortgage, then reports monthly, annual \
                  and long-horizon savings."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly payment for a single fixed-rate loan
    Payment(PaymentArgs),
    /// Compare assuming a loan against a new mortgage
    Savings(SavingsArgs),
    /// Figures for the home-page example scenario
    Example(ExampleArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(output = ?cli.output, "starting");

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::payment::run_payment(args),
        Commands::Savings(args) => commands::savings::run_savings(args),
        Commands::Example(args) => commands::example::run_example(args),
        Commands::Version => {
            println!("assume {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
