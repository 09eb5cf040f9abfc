use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use lending_core::schedule::generate_schedule;
use lending_core::types::LoanTerms;

use crate::input;

/// Arguments for schedule generation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Principal amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Nominal annual interest rate in percent (14.0 = 14%)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Tenure in whole months
    #[arg(long, alias = "tenure")]
    pub tenure_months: Option<u32>,

    /// Disbursement date (YYYY-MM-DD)
    #[arg(long)]
    pub disbursement_date: Option<NaiveDate>,

    /// Borrower monthly income
    #[arg(long)]
    pub monthly_income: Option<Decimal>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms: LoanTerms = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanTerms {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args
                .annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?,
            tenure_months: args
                .tenure_months
                .ok_or("--tenure-months is required (or provide --input)")?,
            disbursement_date: args
                .disbursement_date
                .ok_or("--disbursement-date is required (or provide --input)")?,
            monthly_income: args
                .monthly_income
                .ok_or("--monthly-income is required (or provide --input)")?,
        }
    };

    let result = generate_schedule(&terms)?;
    Ok(serde_json::to_value(result)?)
}
