use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LendingError {
    #[error("Invalid loan terms: {field} — {reason}")]
    InvalidTerms { field: String, reason: String },

    #[error("Installment {installment} exceeds the permitted {cap_ratio} share of monthly income {monthly_income}")]
    AffordabilityExceeded {
        installment: Decimal,
        monthly_income: Decimal,
        cap_ratio: Decimal,
    },

    #[error("Total interest {total_interest} does not exceed the {minimum} minimum")]
    UneconomicalLoan {
        total_interest: Decimal,
        minimum: Decimal,
    },

    #[error("Invalid payment amount: {amount}")]
    InvalidPayment { amount: Decimal },

    #[error("No outstanding installments to apply a payment against")]
    NoOutstandingInstallments,

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LendingError {
    fn from(e: serde_json::Error) -> Self {
        LendingError::SerializationError(e.to_string())
    }
}
