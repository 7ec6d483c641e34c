//! Punch record model and related types.
//!
//! Punch records are the raw input of the engine: timestamped time-clock
//! events owned by the external time-clock subsystem. Within one employee's
//! sequence they arrive in ascending timestamp order, with ties broken by
//! original fetch order.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The type of a time-clock punch event.
///
/// Serialized with the time-clock subsystem's wire values
/// (`CLOCK_IN`, `CLOCK_OUT`, `BREAK_START`, `BREAK_END`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PunchType {
    /// Start of a shift.
    ClockIn,
    /// End of a shift.
    ClockOut,
    /// Start of a break within a shift.
    BreakStart,
    /// End of a break within a shift.
    BreakEnd,
}

/// A reference to the employee a punch belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRef {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's role (e.g., "technician", "manager").
    pub role: String,
    /// Optional URL of the employee's profile photo.
    pub photo_url: Option<String>,
}

/// A reference to the shop where a punch was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopRef {
    /// Unique identifier for the shop.
    pub id: String,
    /// The shop's display name.
    pub name: String,
}

/// A single timestamped time-clock event.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{EmployeeRef, PunchRecord, PunchType};
/// use chrono::NaiveDateTime;
///
/// let punch = PunchRecord {
///     id: "punch_001".to_string(),
///     employee: EmployeeRef {
///         id: "emp_001".to_string(),
///         name: "Dana Reyes".to_string(),
///         role: "technician".to_string(),
///         photo_url: None,
///     },
///     shop: None,
///     punch_type: PunchType::ClockIn,
///     timestamp: NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     latitude: None,
///     longitude: None,
///     is_within_geofence: None,
///     punch_method: "mobile".to_string(),
///     photo_url: None,
/// };
/// assert_eq!(punch.punch_type, PunchType::ClockIn);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchRecord {
    /// Unique identifier for the punch.
    pub id: String,
    /// The employee who recorded the punch.
    pub employee: EmployeeRef,
    /// The shop where the punch was recorded, if known.
    #[serde(default)]
    pub shop: Option<ShopRef>,
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

/// The subset of a punch carried into a reconstructed shift.
///
/// Shifts keep the identifying and audit fields of their clock-in and
/// clock-out punches without duplicating the employee and shop joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchRef {
    /// Unique identifier for the punch.
    pub id: String,
    /// When the punch was recorded.
    pub timestamp: NaiveDateTime,
    /// Latitude captured at punch time, if available.
    pub latitude: Option<f64>,
    /// Longitude captured at punch time, if available.
    pub longitude: Option<f64>,
    /// Whether the punch location fell inside the shop geofence.
    pub is_within_geofence: Option<bool>,
    /// How the punch was recorded.
    pub punch_method: String,
    /// Optional URL of a verification photo taken at punch time.
    pub photo_url: Option<String>,
}

impl From<&PunchRecord> for PunchRef {
    fn from(punch: &PunchRecord) -> Self {
        PunchRef {
            id: punch.id.clone(),
            timestamp: punch.timestamp,
            latitude: punch.latitude,
            longitude: punch.longitude,
            is_within_geofence: punch.is_within_geofence,
            punch_method: punch.punch_method.clone(),
            photo_url: punch.photo_url.clone(),
        }
    }
}
