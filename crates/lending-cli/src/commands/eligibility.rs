use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use lending_core::eligibility::{assess_eligibility, EligibilityInput};
use lending_core::types::LoanType;

use crate::input;

/// Arguments for eligibility assessment
#[derive(Args)]
pub struct EligibilityArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Credit score from the external scoring service
    #[arg(long)]
    pub credit_score: Option<u32>,

    /// Borrower annual income
    #[arg(long)]
    pub annual_income: Option<Decimal>,

    /// Loan product: car, home, education, or personal
    #[arg(long)]
    pub loan_type: Option<String>,

    /// Requested principal
    #[arg(long)]
    pub loan_amount: Option<Decimal>,
}

fn parse_loan_type(raw: &str) -> Result<LoanType, Box<dyn std::error::Error>> {
    match raw.to_ascii_lowercase().as_str() {
        "car" => Ok(LoanType::Car),
        "home" => Ok(LoanType::Home),
        "education" => Ok(LoanType::Education),
        "personal" => Ok(LoanType::Personal),
        other => Err(format!(
            "Unknown loan type '{other}' (expected car, home, education, or personal)"
        )
        .into()),
    }
}

pub fn run_eligibility(args: EligibilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let eligibility_input: EligibilityInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        EligibilityInput {
            credit_score: args
                .credit_score
                .ok_or("--credit-score is required (or provide --input)")?,
            annual_income: args
                .annual_income
                .ok_or("--annual-income is required (or provide --input)")?,
            loan_type: parse_loan_type(
                &args
                    .loan_type
                    .ok_or("--loan-type is required (or provide --input)")?,
            )?,
            loan_amount: args
                .loan_amount
                .ok_or("--loan-amount is required (or provide --input)")?,
        }
    };

    let result = assess_eligibility(&eligibility_input)?;
    Ok(serde_json::to_value(result)?)
}
