use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::AppConfig,
    controller::FormController,
    services::{fragments::Fragments, geocoder::Geocoder, raster::Rasterizer},
    store::TripStore,
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub trips: TripStore,
    /// Single form, single writer: all draft and mode changes go through
    /// this lock, which keeps every event handler run-to-completion.
    pub controller: Arc<Mutex<FormController>>,
    pub fragments: Fragments,
    pub geocoder: Geocoder,
    pub rasterizer: Arc<dyn Rasterizer>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        trips: TripStore,
        controller: FormController,
        fragments: Fragments,
        geocoder: Geocoder,
        rasterizer: Arc<dyn Rasterizer>,
    ) -> Self {
        Self {
            config,
            trips,
            controller: Arc::new(Mutex::new(controller)),
            fragments,
            geocoder,
            rasterizer,
        }
    }
}
