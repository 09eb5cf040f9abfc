mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::eligibility::EligibilityArgs;
use commands::payment::PaymentArgs;
use commands::schedule::ScheduleArgs;
use commands::statement::StatementArgs;

/// Installment loan schedule and payment calculations
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "Installment loan schedule and payment calculations",
    long_about = "A CLI for installment lending calculations with decimal precision. \
                  Generates amortization schedules, allocates incoming payments across \
                  outstanding installments, derives loan statements, and checks \
                  application eligibility."
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
    /// Generate an amortization schedule from loan terms
    Schedule(ScheduleArgs),
    /// Allocate a payment across outstanding installments
    Payment(PaymentArgs),
    /// Derive the past/upcoming statement for a loan
    Statement(StatementArgs),
    /// Check application eligibility gates
    Eligibility(EligibilityArgs),
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
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Payment(args) => commands::payment::run_payment(args),
        Commands::Statement(args) => commands::statement::run_statement(args),
        Commands::Eligibility(args) => commands::eligibility::run_eligibility(args),
        Commands::Version => {
            println!("emi {}", env!("CARGO_PKG_VERSION"));
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
