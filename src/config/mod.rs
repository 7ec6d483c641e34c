//! Settings loading and management for the timeclock engine.
//!
//! The engine's tunable values (overtime threshold, pay-period schedule)
//! live in a YAML settings file. Defaults match the built-in constants, so
//! running without a file is equivalent to the stock configuration.
//!
//! # Example
//!
//! ```no_run
//! use timeclock_engine::config::EngineSettings;
//!
//! let settings = EngineSettings::load("./config/engine.yaml").unwrap();
//! println!("Overtime after {} minutes", settings.overtime_threshold_minutes);
//! ```

mod loader;
mod settings;

pub use settings::{
    DEFAULT_OVERTIME_THRESHOLD_MINUTES, DEFAULT_PAY_PERIOD_LENGTH_DAYS, EngineSettings,
    PayPeriodSchedule,
};
