use std::sync::Arc;

use tokio::sync::{watch, Mutex};

use crate::{error::AppError, models::trip::TripRecord};

use super::kv::KvStore;

pub const TRIPS_KEY: &str = "trips";

/// The ordered trip list, persisted as a JSON array under the `trips` key.
///
/// Order is insertion order: append-only growth, in-place edit, positional
/// removal. Every mutation is written through before it returns and then
/// bumps a revision watch channel; views that must re-render on change
/// subscribe to that channel instead of polling.
#[derive(Clone)]
pub struct TripStore {
    kv: KvStore,
    revision: Arc<watch::Sender<u64>>,
    // Handlers can land on different worker threads; mutations are
    // load-modify-persist and must not interleave.
    write_lock: Arc<Mutex<()>>,
}

impl TripStore {
    pub fn new(kv: KvStore) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            kv,
            revision: Arc::new(revision),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub async fn list(&self) -> Result<Vec<TripRecord>, AppError> {
        let raw = match self.kv.get(TRIPS_KEY).await? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(Vec::new()),
        };
        let trips: Vec<TripRecord> = serde_json::from_str(&raw)?;
        Ok(trips)
    }

    pub async fn find(&self, id: &str) -> Result<Option<TripRecord>, AppError> {
        Ok(self.list().await?.into_iter().find(|trip| trip.id == id))
    }

    pub async fn position_of(&self, id: &str) -> Result<Option<usize>, AppError> {
        Ok(self.list().await?.iter().position(|trip| trip.id == id))
    }

    pub async fn append(&self, record: TripRecord) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut trips = self.list().await?;
        trips.push(record);
        self.persist(&trips).await?;
        self.notify();
        Ok(())
    }

    /// Replaces the record at `index`. An out-of-range index means the
    /// caller's position tracking is stale, which is a contract violation,
    /// not a condition to paper over.
    pub async fn update_at(&self, index: usize, record: TripRecord) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut trips = self.list().await?;
        let len = trips.len();
        let slot = trips
            .get_mut(index)
            .ok_or(AppError::IndexOutOfRange { index, len })?;
        *slot = record;
        self.persist(&trips).await?;
        self.notify();
        Ok(())
    }

    pub async fn remove_at(&self, index: usize) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut trips = self.list().await?;
        let len = trips.len();
        if index >= len {
            return Err(AppError::IndexOutOfRange { index, len });
        }
        trips.remove(index);
        self.persist(&trips).await?;
        self.notify();
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.kv.remove(TRIPS_KEY).await?;
        self.notify();
        Ok(())
    }

    async fn persist(&self, trips: &[TripRecord]) -> Result<(), AppError> {
        let data = serde_json::to_string_pretty(trips)?;
        self.kv.set(TRIPS_KEY, &data).await
    }

    fn notify(&self) {
        let next = *self.revision.borrow() + 1;
        self.revision.send_replace(next);
    }
}
