use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Display color used for this employee's calendar events.
    #[serde(default)]
    pub color: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One weekday entry of an employee's availability template, as returned by
/// `GET /employees/:id/availability`. Times are `"HH:mm"` strings and null
/// when the day is disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    pub id: String,
    /// 0 = Sunday through 6 = Saturday.
    pub day_of_week: u8,
    pub is_available: bool,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Request-side counterpart of [`AvailabilitySlot`], without the server id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayAvailability {
    pub day_of_week: u8,
    pub is_available: bool,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub availability: Vec<WeekdayAvailability>,
}

const SLOT_TIME_FORMAT: &str = "%H:%M";

/// Checks the weekly-template invariant before it is sent to the backend:
/// exactly 7 entries, one per weekday, and for every enabled day a valid
/// `"HH:mm"` window with start strictly before end.
pub fn validate_weekly_availability(days: &[WeekdayAvailability]) -> BookingResult<()> {
    if days.len() != 7 {
        return Err(BookingError::Validation(format!(
            "Weekly availability must contain exactly 7 entries, got {}",
            days.len()
        )));
    }

    let mut seen = [false; 7];
    for day in days {
        let index = usize::from(day.day_of_week);
        if index > 6 {
            return Err(BookingError::Validation(format!(
                "Invalid day of week: {}",
                day.day_of_week
            )));
        }
        if seen[index] {
            return Err(BookingError::Validation(format!(
                "Duplicate entry for day of week {}",
                day.day_of_week
            )));
        }
        seen[index] = true;

        if day.is_available {
            let start = parse_slot_time(day.start_time.as_deref(), day.day_of_week, "start")?;
            let end = parse_slot_time(day.end_time.as_deref(), day.day_of_week, "end")?;
            if start >= end {
                return Err(BookingError::Validation(format!(
                    "Day {}: start time {} must be before end time {}",
                    day.day_of_week,
                    start.format(SLOT_TIME_FORMAT),
                    end.format(SLOT_TIME_FORMAT)
                )));
            }
        }
    }

    Ok(())
}

fn parse_slot_time(value: Option<&str>, day: u8, which: &str) -> BookingResult<NaiveTime> {
    let raw = value.ok_or_else(|| {
        BookingError::Validation(format!("Day {day}: missing {which} time for an enabled day"))
    })?;
    NaiveTime::parse_from_str(raw, SLOT_TIME_FORMAT).map_err(|_| {
        BookingError::Validation(format!("Day {day}: {which} time {raw:?} is not HH:mm"))
    })
}
