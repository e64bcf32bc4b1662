//! Runtime bootstrap shared by the binary and the console.

pub mod error;
pub mod telemetry;
