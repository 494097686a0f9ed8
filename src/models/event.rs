//! Event model and the records that hang off an event.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

/// A scheduled event at a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "EventID")]
    pub id: i64,
    #[serde(rename = "EventName", default, deserialize_with = "crate::models::deserialize_text")]
    pub name: String,
    #[serde(rename = "OrgID")]
    pub organiser_id: i64,
    #[serde(rename = "VenueID", default, skip_serializing_if = "Option::is_none")]
    pub venue_id: Option<i64>,
    #[serde(rename = "VenueName", default, deserialize_with = "crate::models::deserialize_text")]
    pub venue_name: String,
    #[serde(rename = "City", default, deserialize_with = "crate::models::deserialize_text")]
    pub city: String,
    #[serde(rename = "StartTime", deserialize_with = "deserialize_timestamp")]
    pub start_time: DateTime<Local>,
    #[serde(rename = "EndTime", deserialize_with = "deserialize_timestamp")]
    pub end_time: DateTime<Local>,
}

impl Event {
    /// Whether `now` falls inside the event window, both ends included.
    pub fn is_ongoing_at(&self, now: DateTime<Local>) -> bool {
        now >= self.start_time && now <= self.end_time
    }

    /// Case-insensitive substring match on the city.
    pub fn city_matches(&self, location: &str) -> bool {
        self.city.to_lowercase().contains(&location.to_lowercase())
    }
}

/// The organisation running one or more events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organiser {
    #[serde(rename = "OrgID")]
    pub id: i64,
    #[serde(rename = "OrgName", default, deserialize_with = "crate::models::deserialize_text")]
    pub name: String,
}

/// A staff member assigned to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffAssignment {
    #[serde(rename = "StaffID")]
    pub id: i64,
    #[serde(rename = "StaffName", default, deserialize_with = "crate::models::deserialize_text")]
    pub name: String,
    #[serde(rename = "EventID")]
    pub event_id: i64,
}

/// A security guard and the zone they cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityAssignment {
    #[serde(rename = "Name", default, deserialize_with = "crate::models::deserialize_text")]
    pub name: String,
    #[serde(rename = "Zone", default, deserialize_with = "crate::models::deserialize_text")]
    pub zone: String,
}

/// Parse a backend timestamp.
///
/// Values carrying an offset are taken as-is; naive values are read in the
/// local time zone.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}
