//! Loan application eligibility policy.
//!
//! Gates an application on the borrower's credit score and annual income and
//! on per-product amount caps, and derives the monthly income figure the
//! affordability check consumes. The credit score itself comes from an
//! external scoring collaborator; this module only consumes its value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LendingError;
use crate::types::{with_metadata, ComputationOutput, LoanType, Money};
use crate::LendingResult;

// ---------------------------------------------------------------------------
// Policy constants
// ---------------------------------------------------------------------------

/// Minimum credit score for any product.
pub const MIN_CREDIT_SCORE: u32 = 450;
/// Minimum annual income for any product.
pub const MIN_ANNUAL_INCOME: Decimal = dec!(150_000);

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Largest principal offered per product type.
pub fn amount_cap(loan_type: LoanType) -> Money {
    match loan_type {
        LoanType::Car => dec!(750_000),
        LoanType::Home => dec!(8_500_000),
        LoanType::Education => dec!(5_000_000),
        LoanType::Personal => dec!(1_000_000),
    }
}

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityInput {
    /// Score supplied by the external scoring service.
    pub credit_score: u32,
    pub annual_income: Money,
    pub loan_type: LoanType,
    /// Requested principal.
    pub loan_amount: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityAssessment {
    /// All gates passed.
    pub eligible: bool,
    pub meets_credit_floor: bool,
    pub meets_income_floor: bool,
    pub within_amount_cap: bool,
    /// The cap applied for the requested product.
    pub amount_cap: Money,
    /// Annual income / 12, the figure the affordability check consumes.
    pub monthly_income: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Assess whether an application clears the eligibility gates.
///
/// Failing a gate is an assessment outcome, not an error; only malformed
/// input is rejected.
pub fn assess_eligibility(
    input: &EligibilityInput,
) -> LendingResult<ComputationOutput<EligibilityAssessment>> {
    let start = Instant::now();

    if input.loan_amount <= Decimal::ZERO {
        return Err(LendingError::InvalidTerms {
            field: "loan_amount".into(),
            reason: "must be positive".into(),
        });
    }

    let cap = amount_cap(input.loan_type);
    let meets_credit_floor = input.credit_score >= MIN_CREDIT_SCORE;
    let meets_income_floor = input.annual_income >= MIN_ANNUAL_INCOME;
    let within_amount_cap = input.loan_amount <= cap;

    let assessment = EligibilityAssessment {
        eligible: meets_credit_floor && meets_income_floor && within_amount_cap,
        meets_credit_floor,
        meets_income_floor,
        within_amount_cap,
        amount_cap: cap,
        monthly_income: (input.annual_income / MONTHS_PER_YEAR).round_dp(2),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Threshold gates on credit score, annual income, and product amount caps",
        input,
        Vec::new(),
        elapsed,
        assessment,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
