use crate::{error::AppError, models::trip::DriverProfile};

use super::kv::KvStore;

pub const DRIVER_NAME_KEY: &str = "driverName";
pub const LICENSE_PLATE_KEY: &str = "licensePlate";
pub const PASSENGER_CAPACITY_KEY: &str = "passengerCapacity";

/// Persistent driver-profile defaults. Both forms (main and profile) read
/// from here, so committed values can never diverge between them.
#[derive(Clone)]
pub struct ProfileStore {
    kv: KvStore,
}

impl ProfileStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    pub async fn load(&self) -> Result<DriverProfile, AppError> {
        Ok(DriverProfile {
            driver_name: self.kv.get(DRIVER_NAME_KEY).await?.unwrap_or_default(),
            license_plate: self.kv.get(LICENSE_PLATE_KEY).await?.unwrap_or_default(),
            passenger_capacity: self
                .kv
                .get(PASSENGER_CAPACITY_KEY)
                .await?
                .unwrap_or_default(),
        })
    }

    pub async fn save(&self, profile: &DriverProfile) -> Result<(), AppError> {
        self.kv.set(DRIVER_NAME_KEY, &profile.driver_name).await?;
        self.kv
            .set(LICENSE_PLATE_KEY, &profile.license_plate)
            .await?;
        self.kv
            .set(PASSENGER_CAPACITY_KEY, &profile.passenger_capacity)
            .await?;
        Ok(())
    }
}
