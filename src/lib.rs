//! Timesheet reconstruction and labor-time aggregation engine.
//!
//! This crate turns a raw, chronologically ordered stream of time-clock
//! punch events (clock-in, clock-out, break-start, break-end) into
//! structured shifts with regular/overtime splits, and rolls them up into
//! per-employee timesheets and population-wide totals for an arbitrary
//! reporting window.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
