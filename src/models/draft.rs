use chrono::{Local, Timelike};
use serde::Deserialize;
use uuid::Uuid;

use super::trip::{DriverProfile, Meridiem, TripRecord};

/// The uncommitted form state. Lives only inside the controller until a
/// submission turns it into a [`TripRecord`].
#[derive(Debug, Clone)]
pub struct TripDraft {
    pub id: String,
    pub date: String,
    pub time: String,
    pub time_format: Meridiem,
    pub passenger_name: String,
    pub via_service: String,
    pub from_location: String,
    pub to_location: String,
    pub amount: String,
}

impl TripDraft {
    pub fn new() -> Self {
        let mut draft = Self {
            id: Uuid::new_v4().to_string(),
            date: String::new(),
            time: String::new(),
            time_format: Meridiem::Am,
            passenger_name: String::new(),
            via_service: String::new(),
            from_location: String::new(),
            to_location: String::new(),
            amount: String::new(),
        };
        draft.set_current_date_time();
        draft
    }

    /// Pre-fills date and time with the current local wall clock, the way a
    /// fresh form opens.
    pub fn set_current_date_time(&mut self) {
        let now = Local::now();
        self.date = now.format("%Y-%m-%d").to_string();
        let (is_pm, hour) = now.hour12();
        self.time = format!("{:02}:{:02}", hour, now.minute());
        self.time_format = if is_pm { Meridiem::Pm } else { Meridiem::Am };
    }

    /// After a create submission: trip-specific fields are cleared, the next
    /// draft gets a fresh identifier and the current wall clock. Driver
    /// fields are untouched, they live in the profile.
    pub fn reset_for_next_trip(&mut self) {
        self.id = Uuid::new_v4().to_string();
        self.passenger_name.clear();
        self.from_location.clear();
        self.to_location.clear();
        self.amount.clear();
        self.set_current_date_time();
    }

    /// Loads a historical record back into the form, keeping its identifier
    /// so the preview shows the id that will be preserved on update.
    pub fn load_record(&mut self, record: &TripRecord) {
        self.id = record.id.clone();
        self.date = record.date.clone();
        self.time = record.time.clone();
        self.time_format = record.time_format;
        self.passenger_name = record.passenger_name.clone();
        self.via_service = record.via_service.clone();
        self.from_location = record.from_location.clone();
        self.to_location = record.to_location.clone();
        self.amount = record.amount.clone();
    }

    pub fn apply(&mut self, update: &DraftUpdate) {
        self.date = update.trip_date.clone();
        self.time = update.trip_time.clone();
        self.time_format = update.time_format;
        self.passenger_name = update.passenger_name.clone();
        self.via_service = update.via_service.clone();
        self.from_location = update.from_location.clone();
        self.to_location = update.to_location.clone();
        self.amount = update.trip_amount.clone();
    }

    /// Commits the draft into a record, snapshotting the current driver
    /// profile. The caller decides the timestamp (fresh on create, original
    /// on edit).
    pub fn to_record(
        &self,
        profile: &DriverProfile,
        timestamp: chrono::DateTime<chrono::Utc>,
    ) -> TripRecord {
        TripRecord {
            id: self.id.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            time_format: self.time_format,
            passenger_name: self.passenger_name.clone(),
            via_service: self.via_service.clone(),
            from_location: self.from_location.clone(),
            to_location: self.to_location.clone(),
            amount: self.amount.clone(),
            driver_name: profile.driver_name.clone(),
            license_plate: profile.license_plate.clone(),
            passenger_capacity: profile.passenger_capacity.clone(),
            timestamp,
        }
    }
}

impl Default for TripDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// One full snapshot of the form, posted on every tracked field change and
/// on submission. Field names follow the form controls.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftUpdate {
    #[serde(default)]
    pub trip_date: String,
    #[serde(default)]
    pub trip_time: String,
    #[serde(default = "default_meridiem")]
    pub time_format: Meridiem,
    #[serde(default)]
    pub passenger_name: String,
    #[serde(default)]
    pub via_service: String,
    #[serde(default)]
    pub from_location: String,
    #[serde(default)]
    pub to_location: String,
    #[serde(default)]
    pub trip_amount: String,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub license_plate: String,
    #[serde(default)]
    pub passenger_capacity: String,
}

fn default_meridiem() -> Meridiem {
    Meridiem::Am
}
