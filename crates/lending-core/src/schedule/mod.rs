pub mod generator;

pub use generator::{generate_schedule, generate_schedule_with_policy, SchedulePolicy};
