//! Shared library modules providing error types, string predicates, and telemetry initialization.

pub mod errors;
pub mod telemetry;
pub mod text;
