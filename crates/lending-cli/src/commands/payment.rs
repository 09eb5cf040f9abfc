use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use lending_core::payments::{allocate_payment, PaymentInput};

use crate::input;

/// Arguments for payment allocation
#[derive(Args)]
pub struct PaymentArgs {
    /// Path to JSON/YAML input file with amount, payment date, and the
    /// loan's installments
    #[arg(long)]
    pub input: Option<String>,

    /// Payment amount (overrides the file's amount)
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Payment date, YYYY-MM-DD (overrides the file's date)
    #[arg(long)]
    pub payment_date: Option<NaiveDate>,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut payment: PaymentInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input file or piped JSON is required for payment allocation".into());
    };

    if let Some(amount) = args.amount {
        payment.amount = amount;
    }
    if let Some(date) = args.payment_date {
        payment.payment_date = date;
    }

    let result = allocate_payment(&payment)?;
    Ok(serde_json::to_value(result)?)
}
