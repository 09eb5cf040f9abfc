use chrono::NaiveDate;
use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use lending_core::statement::build_statement;
use lending_core::types::Installment;

use crate::input;

/// Arguments for statement derivation
#[derive(Args)]
pub struct StatementArgs {
    /// Path to JSON/YAML input file with the loan's installments
    #[arg(long)]
    pub input: Option<String>,

    /// Statement date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct StatementRequest {
    installments: Vec<Installment>,
}

pub fn run_statement(args: StatementArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: StatementRequest = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input file or piped JSON is required for statements".into());
    };

    // The core never reads the clock; today is resolved here at the boundary.
    let as_of = args
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let statement = build_statement(&request.installments, as_of);
    Ok(serde_json::to_value(statement)?)
}
