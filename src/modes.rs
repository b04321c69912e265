//! Protocol Mode Tables
//!
//! Per-protocol constants (pulse-shaping filters, symbol level tables,
//! frame geometry, timing formulas) and constructors binding them to
//! the shared modulator.

pub mod m17;
pub mod ysf;
