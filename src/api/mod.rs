//! HTTP API module for the timeclock engine.
//!
//! This module provides the REST API endpoints for computing timesheet
//! reports and live presence from posted punch streams.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PresenceRequest, TimesheetRequest};
pub use response::ApiError;
pub use state::AppState;
