mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::quote::QuoteArgs;
use commands::rates::{RatesArgs, ServicesArgs};

/// Monthly fee quotations for accounting and advisory engagements
#[derive(Parser)]
#[command(
    name = "feeq",
    version,
    about = "Monthly fee quotations for accounting and advisory engagements",
    long_about = "A CLI for pricing accounting and advisory engagements with decimal \
                  precision. Prices a business profile against the firm's rate card \
                  and reports the monthly quote with its breakdown, complexity \
                  factors, and included services."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a business profile against the rate card
    Quote(QuoteArgs),
    /// Show the base service package for an entity type
    Services(ServicesArgs),
    /// Print the rate card
    Rates(RatesArgs),
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

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Quote(args) => commands::quote::run_quote(args),
        Commands::Services(args) => commands::rates::run_services(args),
        Commands::Rates(args) => commands::rates::run_rates(args),
        Commands::Version => {
            println!("feeq {}", env!("CARGO_PKG_VERSION"));
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
