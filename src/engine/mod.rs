//! Engine modules: the pure computation behind the calculator.
//!
//! The engine layer sits between configuration (the catalogs) and presentation.
//! It holds no state: every call takes a snapshot of its inputs.

pub mod tiers;
