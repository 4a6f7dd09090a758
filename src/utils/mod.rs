// Utils compartidos

pub mod constants;
pub mod scheduler;

pub use scheduler::{Scheduler, TimeoutScheduler};
