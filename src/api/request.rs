//! Request types for the timeclock engine API.
//!
//! This module defines the JSON request structures for the `/timesheets`
//! and `/presence` endpoints. Punch retrieval is an upstream concern: the
//! caller posts the already-fetched, window-scoped punch list in the body.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::engine::PeriodRequest;
use crate::models::{EmployeeRef, PunchRecord, PunchType, ShopRef};

/// Request body for the `/timesheets` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// The window-scoped punches, ordered by timestamp within each employee.
    pub punches: Vec<PunchRecordRequest>,
    /// The reporting window to resolve.
    #[serde(default)]
    pub period: PeriodRequestBody,
}

/// Request body for the `/presence` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceRequest {
    /// Each employee's punches, ordered by timestamp within each employee.
    pub punches: Vec<PunchRecordRequest>,
    /// The instant to measure running shifts against; defaults to the
    /// server clock when omitted.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

/// Reporting-window parameters in a timesheet request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodRequestBody {
    /// Explicit first calendar day of the window.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Explicit last calendar day of the window.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Period keyword: `today`, `week`, `month`, or `pay-period`.
    #[serde(default)]
    pub period: Option<String>,
}

/// Punch record information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRecordRequest {
    /// Unique identifier for the punch.
    pub id: String,
    /// The employee who recorded the punch.
    pub employee: EmployeeRefRequest,
    /// The shop where the punch was recorded, if known.
    #[serde(default)]
    pub shop: Option<ShopRefRequest>,
    /// The kind of time-clock event.
    #[serde(rename = "type")]
    pub punch_type: PunchType,
    /// When the punch was recorded.
    pub timestamp: NaiveDateTime,
    /// Latitude captured at punch time, if available.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude captured at punch time, if available.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Whether the punch location fell inside the shop geofence.
    #[serde(default)]
    pub is_within_geofence: Option<bool>,
    /// How the punch was recorded (e.g., "mobile", "kiosk", "pin").
    pub punch_method: String,
    /// Optional URL of a verification photo taken at punch time.
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Employee information attached to a punch in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRefRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's role.
    pub role: String,
    /// Optional URL of the employee's profile photo.
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Shop information attached to a punch in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopRefRequest {
    /// Unique identifier for the shop.
    pub id: String,
    /// The shop's display name.
    pub name: String,
}

impl From<PeriodRequestBody> for PeriodRequest {
    fn from(body: PeriodRequestBody) -> Self {
        PeriodRequest {
            start_date: body.start_date,
            end_date: body.end_date,
            period: body.period,
        }
    }
}

impl From<PunchRecordRequest> for PunchRecord {
    fn from(req: PunchRecordRequest) -> Self {
        PunchRecord {
            id: req.id,
            employee: req.employee.into(),
            shop: req.shop.map(Into::into),
            punch_type: req.punch_type,
            timestamp: req.timestamp,
            latitude: req.latitude,
            longitude: req.longitude,
            is_within_geofence: req.is_within_geofence,
            punch_method: req.punch_method,
            photo_url: req.photo_url,
        }
    }
}

impl From<EmployeeRefRequest> for EmployeeRef {
    fn from(req: EmployeeRefRequest) -> Self {
        EmployeeRef {
            id: req.id,
            name: req.name,
            role: req.role,
            photo_url: req.photo_url,
        }
    }
}

impl From<ShopRefRequest> for ShopRef {
    fn from(req: ShopRefRequest) -> Self {
        ShopRef {
            id: req.id,
            name: req.name,
        }
    }
}
