use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted waybill entry. Serialized field names match the on-disk
/// `trips` array, which predates this implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub id: String,
    pub date: String,
    pub time: String,
    pub time_format: Meridiem,
    pub passenger_name: String,
    pub via_service: String,
    pub from_location: String,
    pub to_location: String,
    pub amount: String,
    pub driver_name: String,
    pub license_plate: String,
    pub passenger_capacity: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// The three driver fields shared across trips. These are current defaults
/// only; the copy saved into a [`TripRecord`] never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverProfile {
    pub driver_name: String,
    pub license_plate: String,
    pub passenger_capacity: String,
}
