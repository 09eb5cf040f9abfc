pub mod allocator;

pub use allocator::{allocate_payment, InstallmentOutcome, PaymentAllocationResult, PaymentInput};
