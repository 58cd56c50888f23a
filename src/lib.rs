//! Loyalty accounting and catalogue consistency for a member-management tool.
//!
//! The domain model covers point counters with saturating arithmetic, tier
//! classification, the uniqueness-enforcing item catalogue, and the member
//! aggregate. The command layer orchestrates the use-cases over roster and
//! catalogue ports; in-memory adapters back both for single-process use.

pub mod adapters;
pub mod commands;
pub mod domain;
pub mod ports;
