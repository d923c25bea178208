use askama::Template;
use chrono::Local;

use crate::{
    format,
    models::{
        draft::TripDraft,
        trip::{DriverProfile, TripRecord},
    },
};

/// The read-only preview surface. Everything here is already display-ready;
/// the template does no formatting of its own.
#[derive(Debug, Clone, Template)]
#[template(path = "waybill.html")]
pub struct WaybillView {
    pub trip_id: String,
    pub passenger: String,
    pub via: String,
    pub from_location: String,
    pub to_location: String,
    pub amount: String,
    pub date_time: String,
    pub driver: String,
    pub license: String,
    pub capacity: String,
}

impl WaybillView {
    /// Live preview: current draft plus the working driver profile.
    pub fn from_draft(draft: &TripDraft, profile: &DriverProfile) -> Self {
        Self {
            trip_id: draft.id.clone(),
            passenger: format::passenger_or_default(&draft.passenger_name).to_string(),
            via: draft.via_service.clone(),
            from_location: format::from_location_or_default(&draft.from_location).to_string(),
            to_location: draft.to_location.clone(),
            amount: format::display_amount(&draft.amount),
            date_time: format::display_date_time(&draft.date, &draft.time, draft.time_format),
            driver: profile.driver_name.clone(),
            license: profile.license_plate.clone(),
            capacity: profile.passenger_capacity.clone(),
        }
    }

    /// Detached preview hydrated from a saved record, used for per-row
    /// export. Driver fields come from the record's immutable snapshot, not
    /// the current profile.
    pub fn from_record(record: &TripRecord) -> Self {
        Self {
            trip_id: record.id.clone(),
            passenger: record.passenger_name.clone(),
            via: record.via_service.clone(),
            from_location: record.from_location.clone(),
            to_location: record.to_location.clone(),
            amount: format::display_amount(&record.amount),
            date_time: format::display_date_time(&record.date, &record.time, record.time_format),
            driver: record.driver_name.clone(),
            license: record.license_plate.clone(),
            capacity: record.passenger_capacity.clone(),
        }
    }
}

/// Standalone document wrapped around a waybill fragment for the
/// rasterizer, which renders whole pages rather than fragments.
#[derive(Template)]
#[template(path = "export.html")]
pub struct ExportPage {
    pub waybill: String,
}

/// One row of the history list.
#[derive(Debug, Clone)]
pub struct TripRow {
    pub id: String,
    pub passenger: String,
    pub saved_at: String,
    pub from_location: String,
    pub to_location: String,
    pub via: String,
    pub amount: String,
}

#[derive(Template)]
#[template(path = "trips_list.html")]
pub struct TripsListView {
    pub trips: Vec<TripRow>,
}

impl TripsListView {
    pub fn from_records(records: &[TripRecord]) -> Self {
        let trips = records
            .iter()
            .map(|record| TripRow {
                id: record.id.clone(),
                passenger: record.passenger_name.clone(),
                saved_at: record
                    .timestamp
                    .with_timezone(&Local)
                    .format("%m/%d/%Y %I:%M %p")
                    .to_string(),
                from_location: record.from_location.clone(),
                to_location: record.to_location.clone(),
                via: record.via_service.clone(),
                amount: if record.amount.trim().is_empty() {
                    String::new()
                } else {
                    format::display_amount(&record.amount)
                },
            })
            .collect();
        Self { trips }
    }
}
