//! Loan statement derivation.
//!
//! Splits a loan's installments into payments already made and dues still
//! ahead, with overdue flags computed against the supplied date. Pure
//! derivation over the installment set; the clock stays with the caller.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Installment, Money};

/// A settled installment, as it appears on the statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PastEntry {
    pub due_date: NaiveDate,
    pub principal: Money,
    pub interest: Money,
    pub amount_paid: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
}

/// An open installment, as it appears on the statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingEntry {
    pub due_date: NaiveDate,
    pub amount_due: Money,
    /// Gap still to pay; smaller than `amount_due` after a partial payment.
    pub outstanding: Money,
    pub overdue: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanStatement {
    pub as_of: NaiveDate,
    pub past: Vec<PastEntry>,
    pub upcoming: Vec<UpcomingEntry>,
    pub total_paid: Money,
    pub total_outstanding: Money,
}

/// Build the past/upcoming statement for a loan's installments.
pub fn build_statement(installments: &[Installment], as_of: NaiveDate) -> LoanStatement {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    let mut total_paid = Decimal::ZERO;
    let mut total_outstanding = Decimal::ZERO;

    for installment in installments {
        total_paid += installment.amount_paid;
        if installment.is_paid() {
            past.push(PastEntry {
                due_date: installment.due_date,
                principal: installment.principal_due,
                interest: installment.interest_due,
                amount_paid: installment.amount_paid,
                payment_date: installment.payment_date,
            });
        } else {
            total_outstanding += installment.outstanding();
            upcoming.push(UpcomingEntry {
                due_date: installment.due_date,
                amount_due: installment.amount_due,
                outstanding: installment.outstanding(),
                overdue: installment.is_overdue(as_of),
            });
        }
    }

    LoanStatement {
        as_of,
        past,
        upcoming,
        total_paid,
        total_outstanding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InstallmentStatus;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn row(sequence: u32, month: u32, status: InstallmentStatus, paid: Decimal) -> Installment {
        Installment {
            sequence,
            due_date: d(2025, month, 1),
            principal_due: dec!(4_200),
            interest_due: dec!(800),
            amount_due: dec!(5_000),
            amount_paid: paid,
            payment_date: (paid > dec!(0)).then(|| d(2025, month, 5)),
            status,
        }
    }

    #[test]
    fn test_statement_splits_past_and_upcoming() {
        let installments = vec![
            row(1, 3, InstallmentStatus::Paid, dec!(5_000)),
            row(2, 4, InstallmentStatus::PartiallyPaid, dec!(2_000)),
            row(3, 5, InstallmentStatus::Unpaid, dec!(0)),
        ];
        let statement = build_statement(&installments, d(2025, 4, 10));

        assert_eq!(statement.past.len(), 1);
        assert_eq!(statement.upcoming.len(), 2);
        assert_eq!(statement.total_paid, dec!(7_000));
        assert_eq!(statement.total_outstanding, dec!(8_000));

        // Row 2 is past due and open; row 3 is not yet due.
        assert!(statement.upcoming[0].overdue);
        assert_eq!(statement.upcoming[0].outstanding, dec!(3_000));
        assert!(!statement.upcoming[1].overdue);
        assert_eq!(statement.upcoming[1].outstanding, dec!(5_000));
    }

    #[test]
    fn test_fully_settled_loan_has_no_upcoming_rows() {
        let installments = vec![
            row(1, 3, InstallmentStatus::Paid, dec!(5_000)),
            row(2, 4, InstallmentStatus::Paid, dec!(5_000)),
        ];
        let statement = build_statement(&installments, d(2025, 6, 1));
        assert!(statement.upcoming.is_empty());
        assert_eq!(statement.total_outstanding, dec!(0));
        assert_eq!(statement.total_paid, dec!(10_000));
    }

    #[test]
    fn test_empty_installment_set_yields_empty_statement() {
        let statement = build_statement(&[], d(2025, 6, 1));
        assert!(statement.past.is_empty());
        assert!(statement.upcoming.is_empty());
        assert_eq!(statement.total_paid, dec!(0));
    }
}
