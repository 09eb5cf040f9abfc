//! Amortization schedule generation for installment loans.
//!
//! Turns loan terms into the full repayment schedule at disbursement: a level
//! installment on the reducing balance, due on the 1st of each month, with
//! the final row absorbing rounding residue so the loan amortizes to exactly
//! zero. All math uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::dates::first_of_next_month;
use crate::error::LendingError;
use crate::types::{
    with_metadata, ComputationOutput, Installment, InstallmentStatus, LoanSchedule, LoanTerms,
    Money, Rate,
};
use crate::LendingResult;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Annual percent -> monthly fraction divisor (12 months x 100 percent).
const MONTHLY_RATE_DIVISOR: Decimal = dec!(1200);
/// Monetary values carry two decimal places.
const MONEY_DP: u32 = 2;

/// Lending policy applied during schedule generation.
///
/// The defaults are the house policy; tests and callers with different
/// underwriting rules can pass their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePolicy {
    /// Minimum annual rate in percent. Requests below it are clamped up
    /// (with a warning), never rejected.
    pub rate_floor_pct: Rate,
    /// Maximum share of monthly income one installment may consume.
    pub income_cap_ratio: Decimal,
    /// A loan must earn more than this much interest over its life.
    pub min_total_interest: Money,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        SchedulePolicy {
            rate_floor_pct: dec!(14),
            income_cap_ratio: dec!(0.60),
            min_total_interest: dec!(10_000),
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate the full schedule for `terms` under the default policy.
pub fn generate_schedule(terms: &LoanTerms) -> LendingResult<ComputationOutput<LoanSchedule>> {
    generate_schedule_with_policy(terms, &SchedulePolicy::default())
}

/// Generate the full schedule for `terms` under an explicit policy.
///
/// Either returns the complete schedule or fails with a specific rejection;
/// no partial schedule ever escapes.
pub fn generate_schedule_with_policy(
    terms: &LoanTerms,
    policy: &SchedulePolicy,
) -> LendingResult<ComputationOutput<LoanSchedule>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_terms(terms)?;

    let effective_rate_pct = if terms.annual_rate < policy.rate_floor_pct {
        warnings.push(format!(
            "Requested rate {}% is below the {}% floor; floor applied",
            terms.annual_rate, policy.rate_floor_pct
        ));
        policy.rate_floor_pct
    } else {
        terms.annual_rate
    };
    let monthly_rate = effective_rate_pct / MONTHLY_RATE_DIVISOR;

    // Affordability is checked on the raw level installment, before any rows
    // are built.
    let level_amount = level_installment(terms.principal, monthly_rate, terms.tenure_months);
    let max_installment = policy.income_cap_ratio * terms.monthly_income;
    if level_amount > max_installment {
        return Err(LendingError::AffordabilityExceeded {
            installment: level_amount.round_dp(MONEY_DP),
            monthly_income: terms.monthly_income,
            cap_ratio: policy.income_cap_ratio,
        });
    }

    let rounded_amount = level_amount.round_dp(MONEY_DP);
    let mut installments = Vec::with_capacity(terms.tenure_months as usize);
    let mut remaining = terms.principal;
    let mut total_interest = Decimal::ZERO;
    let mut due_date = first_of_next_month(terms.disbursement_date)?;

    for month in 1..=terms.tenure_months {
        let interest = (remaining * monthly_rate).round_dp(MONEY_DP);
        let (principal, amount_due) = if month == terms.tenure_months {
            // Final row repays whatever is left, absorbing rounding drift
            // from the earlier rows.
            (remaining, remaining + interest)
        } else {
            (rounded_amount - interest, rounded_amount)
        };

        installments.push(Installment {
            sequence: month,
            due_date,
            principal_due: principal,
            interest_due: interest,
            amount_due,
            amount_paid: Decimal::ZERO,
            payment_date: None,
            status: InstallmentStatus::Unpaid,
        });

        remaining -= principal;
        total_interest += interest;
        if month < terms.tenure_months {
            due_date = first_of_next_month(due_date)?;
        }
    }

    // Evaluated only once the full schedule exists.
    if total_interest <= policy.min_total_interest {
        return Err(LendingError::UneconomicalLoan {
            total_interest,
            minimum: policy.min_total_interest,
        });
    }

    let schedule = LoanSchedule {
        installments,
        total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Reducing-balance amortization with level installments",
        terms,
        warnings,
        elapsed,
        schedule,
    ))
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Level installment: P * r * (1+r)^n / ((1+r)^n - 1).
fn level_installment(principal: Money, monthly_rate: Rate, tenure_months: u32) -> Money {
    if monthly_rate.is_zero() {
        return principal / Decimal::from(tenure_months);
    }
    let growth = (Decimal::ONE + monthly_rate).powu(tenure_months as u64);
    principal * monthly_rate * growth / (growth - Decimal::ONE)
}

fn validate_terms(terms: &LoanTerms) -> LendingResult<()> {
    if terms.principal <= Decimal::ZERO {
        return Err(LendingError::InvalidTerms {
            field: "principal".into(),
            reason: "must be positive".into(),
        });
    }
    if terms.tenure_months == 0 {
        return Err(LendingError::InvalidTerms {
            field: "tenure_months".into(),
            reason: "must be at least one month".into(),
        });
    }
    if terms.monthly_income <= Decimal::ZERO {
        return Err(LendingError::InvalidTerms {
            field: "monthly_income".into(),
            reason: "must be positive".into(),
        });
    }
    if terms.annual_rate < Decimal::ZERO {
        return Err(LendingError::InvalidTerms {
            field: "annual_rate".into(),
            reason: "must not be negative".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
