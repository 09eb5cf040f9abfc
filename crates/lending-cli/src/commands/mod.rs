pub mod eligibility;
pub mod payment;
pub mod schedule;
pub mod statement;
