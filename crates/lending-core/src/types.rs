use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Annual interest rates expressed in percent (14.00 = 14%). Never as fractions.
pub type Rate = Decimal;

/// Loan product category. Drives the per-product eligibility amount caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanType {
    Car,
    Home,
    Education,
    Personal,
}

/// Immutable terms of a single loan, fixed at application time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    /// Requested nominal annual rate in percent. Subject to the policy floor.
    pub annual_rate: Rate,
    pub tenure_months: u32,
    pub disbursement_date: NaiveDate,
    /// Borrower monthly income, for the affordability check.
    pub monthly_income: Money,
}

/// Paid-state of an installment. Transitions only ever move forward:
/// Unpaid -> PartiallyPaid -> Paid, or Unpaid -> Paid on full settlement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallmentStatus {
    #[default]
    Unpaid,
    PartiallyPaid,
    Paid,
}

/// One scheduled repayment row. The principal/interest split is fixed at
/// generation time; only the paid-state fields change afterwards, and those
/// change by replacement rather than in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based position in the schedule. Ascending sequence equals ascending
    /// due date.
    pub sequence: u32,
    /// Always the first calendar day of a month.
    pub due_date: NaiveDate,
    pub principal_due: Money,
    pub interest_due: Money,
    pub amount_due: Money,
    pub amount_paid: Money,
    /// Date of the first payment that touched this installment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    pub status: InstallmentStatus,
}

impl Installment {
    /// Unpaid balance on this installment.
    pub fn outstanding(&self) -> Money {
        self.amount_due - self.amount_paid
    }

    pub fn is_paid(&self) -> bool {
        self.status == InstallmentStatus::Paid
    }

    /// Overdue is derived on read against the supplied date, never stored.
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        !self.is_paid() && self.due_date < as_of
    }
}

/// A full amortization schedule plus the interest earned over the life of
/// the loan. Generated once per loan; re-derivable only by regenerating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub installments: Vec<Installment>,
    pub total_interest: Money,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(status: InstallmentStatus) -> Installment {
        Installment {
            sequence: 1,
            due_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            principal_due: dec!(4_500),
            interest_due: dec!(500),
            amount_due: dec!(5_000),
            amount_paid: dec!(0),
            payment_date: None,
            status,
        }
    }

    #[test]
    fn test_outstanding_reflects_partial_payment() {
        let mut r = row(InstallmentStatus::PartiallyPaid);
        r.amount_paid = dec!(1_200);
        assert_eq!(r.outstanding(), dec!(3_800));
    }

    #[test]
    fn test_overdue_only_before_due_date_and_only_while_unpaid() {
        let r = row(InstallmentStatus::Unpaid);
        let due = r.due_date;

        // Due today is not overdue; strictly past due is.
        assert!(!r.is_overdue(due));
        assert!(r.is_overdue(due.succ_opt().unwrap()));

        let paid = row(InstallmentStatus::Paid);
        assert!(!paid.is_overdue(due.succ_opt().unwrap()));
    }
}
