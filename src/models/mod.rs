//! Core data models for the timeclock engine.
//!
//! This module contains all the domain models used throughout the engine.

mod punch;
mod shift;
mod timesheet;

pub use punch::{EmployeeRef, PunchRecord, PunchRef, PunchType, ShopRef};
pub use shift::{Break, Shift};
pub use timesheet::{EmployeeTimesheet, ReportWindow, TimesheetReport, TimesheetSummary, Totals};
