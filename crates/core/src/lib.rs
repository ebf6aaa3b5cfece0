//! Pure domain logic for the comtrack commissioning tracker.
//!
//! No I/O, no async, no database types. This crate holds the shared
//! identifier/timestamp aliases, the domain error taxonomy, checklist field
//! utilities (slug and unique-id generation, option normalization,
//! validation), the execution status machine, and the project/stage
//! lifecycle enums.

pub mod error;
pub mod execution;
pub mod fields;
pub mod status;
pub mod types;
