use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use crate::{
    error::AppError,
    models::{
        draft::{DraftUpdate, TripDraft},
        trip::DriverProfile,
    },
    store::{ProfileStore, TripStore},
    views::WaybillView,
};

/// The two submission behaviors. Exactly one is active at a time: entering
/// edit mode again before submitting replaces the value instead of stacking
/// a second handler, so a single submission can never write twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit {
        /// Store position captured when edit mode was entered.
        index: usize,
        id: String,
        timestamp: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Field is now editable; the client focuses it and relabels the button.
    Unlocked,
    /// Value committed to the persistent defaults; field readonly again.
    Committed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProfileField {
    #[serde(rename = "driverName")]
    DriverName,
    #[serde(rename = "licensePlate")]
    LicensePlate,
    #[serde(rename = "passengerCapacity")]
    PassengerCapacity,
}

/// Which driver-profile fields are currently unlocked for inline editing.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineEdits {
    pub driver_name: bool,
    pub license_plate: bool,
    pub passenger_capacity: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub license_plate: String,
    #[serde(default)]
    pub passenger_capacity: String,
}

/// Owns the draft, the working driver profile and the create/edit state
/// machine. Every change to the draft is followed by a synchronous preview
/// recompute via [`FormController::preview`].
pub struct FormController {
    trips: TripStore,
    profiles: ProfileStore,
    draft: TripDraft,
    profile: DriverProfile,
    mode: Mode,
    inline: InlineEdits,
}

impl FormController {
    pub fn new(trips: TripStore, profiles: ProfileStore, profile: DriverProfile) -> Self {
        Self {
            trips,
            profiles,
            draft: TripDraft::new(),
            profile,
            mode: Mode::Create,
            inline: InlineEdits::default(),
        }
    }

    pub fn draft(&self) -> &TripDraft {
        &self.draft
    }

    pub fn profile(&self) -> &DriverProfile {
        &self.profile
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn inline_edits(&self) -> InlineEdits {
        self.inline
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            Mode::Create => "Generate Waybill",
            Mode::Edit { .. } => "Update Waybill",
        }
    }

    /// Applies one form snapshot. Driver fields feed the working profile so
    /// the preview tracks them too; they are not persisted until a commit.
    pub fn set_draft(&mut self, update: &DraftUpdate) {
        self.draft.apply(update);
        self.profile.driver_name = update.driver_name.clone();
        self.profile.license_plate = update.license_plate.clone();
        self.profile.passenger_capacity = update.passenger_capacity.clone();
    }

    pub fn preview(&self) -> WaybillView {
        WaybillView::from_draft(&self.draft, &self.profile)
    }

    /// Loads a saved record into the form. The record's position is captured
    /// now; the later submit replaces exactly that slot.
    pub async fn enter_edit(&mut self, id: &str) -> Result<(), AppError> {
        let index = self.trips.position_of(id).await?.ok_or(AppError::NotFound)?;
        let record = self.trips.find(id).await?.ok_or(AppError::NotFound)?;
        self.draft.load_record(&record);
        self.mode = Mode::Edit {
            index,
            id: record.id,
            timestamp: record.timestamp,
        };
        Ok(())
    }

    pub async fn submit(&mut self) -> Result<SubmitOutcome, AppError> {
        match self.mode.clone() {
            Mode::Create => {
                self.profiles.save(&self.profile).await?;
                let record = self.draft.to_record(&self.profile, Utc::now());
                info!(trip = %record.id, "saving new waybill");
                self.trips.append(record).await?;
                self.draft.reset_for_next_trip();
                Ok(SubmitOutcome::Created)
            }
            Mode::Edit {
                index,
                id,
                timestamp,
            } => {
                let mut record = self.draft.to_record(&self.profile, timestamp);
                record.id = id;
                info!(trip = %record.id, index, "updating waybill in place");
                self.trips.update_at(index, record).await?;
                self.mode = Mode::Create;
                self.draft.reset_for_next_trip();
                Ok(SubmitOutcome::Updated)
            }
        }
    }

    /// Profile-form save button: persists all three defaults and mirrors
    /// them into the main form's working profile.
    pub async fn save_profile(&mut self, update: &ProfileUpdate) -> Result<(), AppError> {
        self.profile = DriverProfile {
            driver_name: update.driver_name.clone(),
            license_plate: update.license_plate.clone(),
            passenger_capacity: update.passenger_capacity.clone(),
        };
        self.profiles.save(&self.profile).await
    }

    /// Inline edit toggle for a single driver field. First call unlocks the
    /// field; the next call commits `value` to the persistent defaults and
    /// locks it again.
    pub async fn toggle_field(
        &mut self,
        field: ProfileField,
        value: &str,
    ) -> Result<ToggleOutcome, AppError> {
        let unlocked = match field {
            ProfileField::DriverName => &mut self.inline.driver_name,
            ProfileField::LicensePlate => &mut self.inline.license_plate,
            ProfileField::PassengerCapacity => &mut self.inline.passenger_capacity,
        };

        if !*unlocked {
            *unlocked = true;
            return Ok(ToggleOutcome::Unlocked);
        }

        *unlocked = false;
        match field {
            ProfileField::DriverName => self.profile.driver_name = value.to_string(),
            ProfileField::LicensePlate => self.profile.license_plate = value.to_string(),
            ProfileField::PassengerCapacity => self.profile.passenger_capacity = value.to_string(),
        }
        self.profiles.save(&self.profile).await?;
        Ok(ToggleOutcome::Committed)
    }
}
