pub mod dates;
pub mod error;
pub mod types;

#[cfg(feature = "schedule")]
pub mod schedule;

#[cfg(feature = "payments")]
pub mod payments;

#[cfg(feature = "eligibility")]
pub mod eligibility;

#[cfg(feature = "statement")]
pub mod statement;

pub use error::LendingError;
pub use types::*;

/// Standard result type for all lending-core operations
pub type LendingResult<T> = Result<T, LendingError>;
