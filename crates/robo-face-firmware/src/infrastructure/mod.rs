//! Infrastructure layer - Port implementations
//!
//! Concrete implementations of the core ports on top of the RP2040
//! peripherals, plus the embassy tasks that keep them running.

pub mod drivers;
pub mod exchange;
pub mod tasks;
