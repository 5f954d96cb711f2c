//! Rational Choice - scoring two purchase alternatives against a budget.
//!
//! A student rates two alternatives on a handful of criteria; the crate adds
//! an affordability score, averages everything into a value index, picks the
//! more rational alternative, and reports what choosing it gives up.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
