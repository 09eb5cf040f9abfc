//! Payment waterfall allocation across outstanding installments.
//!
//! Applies one incoming payment to a loan's unpaid installments in ascending
//! due-date order: full settlements while the remainder covers the whole
//! outstanding gap, then at most one partial application. Whatever cannot be
//! applied is returned as excess, never rolled into future rows.
//!
//! Transitions are pure: callers receive updated installment copies and
//! perform the durable write themselves, under the per-loan serialization
//! they already hold. A rejected payment touches nothing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LendingError;
use crate::types::{Installment, InstallmentStatus, Money};
use crate::LendingResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// A single incoming payment against a loan's installments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInput {
    pub amount: Money,
    /// Value date recorded on every installment this payment first touches.
    pub payment_date: NaiveDate,
    /// The loan's installments, ordered by due date ascending. Rows already
    /// paid are skipped.
    pub installments: Vec<Installment>,
}

/// Updated state of one installment the payment touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentOutcome {
    pub installment: Installment,
    /// Portion of the payment applied to this installment.
    pub applied: Money,
}

/// Result of allocating one payment.
///
/// Conservation holds exactly: `amount = total_applied + excess`, and
/// `total_applied` is the sum of the per-installment applied portions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentAllocationResult {
    /// Installments the payment touched, oldest due first, in their
    /// post-payment state.
    pub outcomes: Vec<InstallmentOutcome>,
    pub total_applied: Money,
    /// Portion no unpaid installment could absorb. Never applied to
    /// not-yet-due rows, never dropped.
    pub excess: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Allocate `input.amount` across the unpaid installments, oldest due first.
pub fn allocate_payment(input: &PaymentInput) -> LendingResult<PaymentAllocationResult> {
    if input.amount <= Decimal::ZERO {
        return Err(LendingError::InvalidPayment {
            amount: input.amount,
        });
    }

    let unpaid: Vec<&Installment> = input
        .installments
        .iter()
        .filter(|i| !i.is_paid())
        .collect();
    if unpaid.is_empty() {
        return Err(LendingError::NoOutstandingInstallments);
    }

    let mut outcomes = Vec::new();
    let mut remaining = input.amount;

    for installment in unpaid {
        if remaining.is_zero() {
            break;
        }
        let gap = installment.outstanding();
        if remaining >= gap {
            outcomes.push(InstallmentOutcome {
                installment: settle(installment, input.payment_date),
                applied: gap,
            });
            remaining -= gap;
        } else {
            outcomes.push(InstallmentOutcome {
                installment: apply_partial(installment, remaining, input.payment_date),
                applied: remaining,
            });
            remaining = Decimal::ZERO;
        }
    }

    Ok(PaymentAllocationResult {
        outcomes,
        total_applied: input.amount - remaining,
        excess: remaining,
    })
}

// ---------------------------------------------------------------------------
// State transitions
// ---------------------------------------------------------------------------

/// Full settlement: the whole outstanding gap is covered.
fn settle(installment: &Installment, payment_date: NaiveDate) -> Installment {
    let mut updated = installment.clone();
    updated.amount_paid = updated.amount_due;
    updated.status = InstallmentStatus::Paid;
    updated.payment_date.get_or_insert(payment_date);
    updated
}

/// Partial application: the outstanding gap strictly shrinks, the row stays
/// open. The stored principal/interest split is left untouched.
fn apply_partial(installment: &Installment, amount: Money, payment_date: NaiveDate) -> Installment {
    let mut updated = installment.clone();
    updated.amount_paid += amount;
    updated.status = InstallmentStatus::PartiallyPaid;
    updated.payment_date.get_or_insert(payment_date);
    updated
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
