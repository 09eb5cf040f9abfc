use chrono::NaiveDate;
use lending_core::payments::{allocate_payment, PaymentInput};
use lending_core::schedule::generate_schedule;
use lending_core::types::{Installment, InstallmentStatus, LoanTerms};
use lending_core::LendingError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Payment waterfall tests
// ===========================================================================

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Helper: an unpaid installment of `amount` due on the 1st of `month` 2025.
fn due(sequence: u32, month: u32, amount: Decimal) -> Installment {
    Installment {
        sequence,
        due_date: d(2025, month, 1),
        principal_due: amount,
        interest_due: dec!(0),
        amount_due: amount,
        amount_paid: dec!(0),
        payment_date: None,
        status: InstallmentStatus::Unpaid,
    }
}

fn three_open_fives() -> Vec<Installment> {
    vec![
        due(1, 4, dec!(5_000)),
        due(2, 5, dec!(5_000)),
        due(3, 6, dec!(5_000)),
    ]
}

fn pay(amount: Decimal, installments: Vec<Installment>) -> PaymentInput {
    PaymentInput {
        amount,
        payment_date: d(2025, 6, 18),
        installments,
    }
}

// ---------------------------------------------------------------------------
// Scenario C: three 5,000 dues, payment of 12,000
// ---------------------------------------------------------------------------

#[test]
fn test_scenario_c_two_settled_one_partial_no_excess() {
    let result = allocate_payment(&pay(dec!(12_000), three_open_fives())).unwrap();

    assert_eq!(result.outcomes.len(), 3);
    assert_eq!(
        result.outcomes[0].installment.status,
        InstallmentStatus::Paid
    );
    assert_eq!(
        result.outcomes[1].installment.status,
        InstallmentStatus::Paid
    );

    let third = &result.outcomes[2].installment;
    assert_eq!(third.status, InstallmentStatus::PartiallyPaid);
    assert_eq!(third.amount_paid, dec!(2_000));
    assert_eq!(third.outstanding(), dec!(3_000));

    assert_eq!(result.total_applied, dec!(12_000));
    assert_eq!(result.excess, dec!(0));
}

// ---------------------------------------------------------------------------
// Scenario D: one 5,000 due, payment of 7,000
// ---------------------------------------------------------------------------

#[test]
fn test_scenario_d_overpayment_returns_excess() {
    let result = allocate_payment(&pay(dec!(7_000), vec![due(1, 4, dec!(5_000))])).unwrap();

    assert_eq!(result.outcomes.len(), 1);
    assert_eq!(
        result.outcomes[0].installment.status,
        InstallmentStatus::Paid
    );
    assert_eq!(result.outcomes[0].applied, dec!(5_000));
    assert_eq!(result.total_applied, dec!(5_000));
    assert_eq!(result.excess, dec!(2_000));
}

// ---------------------------------------------------------------------------
// Ordering and conservation
// ---------------------------------------------------------------------------

#[test]
fn test_waterfall_never_reaches_past_the_remainder() {
    // Covers row 1 fully and row 2 partially; row 3 must stay untouched.
    let result = allocate_payment(&pay(dec!(8_000), three_open_fives())).unwrap();

    assert_eq!(result.outcomes.len(), 2);
    assert_eq!(result.outcomes[0].installment.sequence, 1);
    assert_eq!(result.outcomes[1].installment.sequence, 2);
    assert_eq!(
        result.outcomes[1].installment.status,
        InstallmentStatus::PartiallyPaid
    );
    assert!(result
        .outcomes
        .iter()
        .all(|o| o.installment.sequence != 3));
}

#[test]
fn test_payment_is_conserved_for_any_amount() {
    for amount in [
        dec!(0.01),
        dec!(1),
        dec!(2_500),
        dec!(5_000),
        dec!(12_000),
        dec!(15_000),
        dec!(20_000),
    ] {
        let result = allocate_payment(&pay(amount, three_open_fives())).unwrap();
        let applied_sum: Decimal = result.outcomes.iter().map(|o| o.applied).sum();

        assert_eq!(applied_sum, result.total_applied);
        assert_eq!(
            amount,
            result.total_applied + result.excess,
            "conservation must hold for a payment of {amount}"
        );
    }
}

#[test]
fn test_exact_settlement_of_everything_leaves_no_excess() {
    let result = allocate_payment(&pay(dec!(15_000), three_open_fives())).unwrap();
    assert_eq!(result.outcomes.len(), 3);
    assert!(result
        .outcomes
        .iter()
        .all(|o| o.installment.status == InstallmentStatus::Paid));
    assert_eq!(result.excess, dec!(0));
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

#[test]
fn test_empty_installment_set_is_rejected() {
    match allocate_payment(&pay(dec!(5_000), vec![])) {
        Err(LendingError::NoOutstandingInstallments) => {}
        other => panic!("expected NoOutstandingInstallments, got {other:?}"),
    }
}

#[test]
fn test_non_positive_amounts_are_rejected() {
    for amount in [dec!(0), dec!(-7_000)] {
        match allocate_payment(&pay(amount, three_open_fives())) {
            Err(LendingError::InvalidPayment { .. }) => {}
            other => panic!("expected InvalidPayment for {amount}, got {other:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Against a generated schedule
// ---------------------------------------------------------------------------

#[test]
fn test_allocation_against_a_generated_schedule() {
    let terms = LoanTerms {
        principal: dec!(500_000),
        annual_rate: dec!(14),
        tenure_months: 24,
        disbursement_date: d(2024, 3, 15),
        monthly_income: dec!(100_000),
    };
    let schedule = generate_schedule(&terms).unwrap().result;

    // Pay the first two installments plus ten cents.
    let amount = schedule.installments[0].amount_due + schedule.installments[1].amount_due
        + dec!(0.10);
    let input = PaymentInput {
        amount,
        payment_date: d(2024, 5, 3),
        installments: schedule.installments,
    };
    let result = allocate_payment(&input).unwrap();

    assert_eq!(result.outcomes.len(), 3);
    assert_eq!(
        result.outcomes[0].installment.status,
        InstallmentStatus::Paid
    );
    assert_eq!(
        result.outcomes[1].installment.status,
        InstallmentStatus::Paid
    );
    assert_eq!(
        result.outcomes[2].installment.status,
        InstallmentStatus::PartiallyPaid
    );
    assert_eq!(result.outcomes[2].installment.amount_paid, dec!(0.10));
    assert_eq!(result.excess, dec!(0));
    assert_eq!(amount, result.total_applied + result.excess);
}
