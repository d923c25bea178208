use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use waybill::config::AppConfig;
use waybill::controller::FormController;
use waybill::error::AppError;
use waybill::routes::create_router;
use waybill::services::{
    fragments::Fragments,
    geocoder::Geocoder,
    raster::{Rasterizer, WkhtmlRasterizer},
};
use waybill::state::AppState;
use waybill::store::{KvStore, ProfileStore, TripStore};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env()?;

    let kv = KvStore::new(config.data_root.clone());
    kv.ensure_structure().await?;
    let trips = TripStore::new(kv.clone());
    let profiles = ProfileStore::new(kv);
    let saved_profile = profiles.load().await?;

    let controller = FormController::new(trips.clone(), profiles.clone(), saved_profile);
    let fragments = Fragments::new(config.fragments_root.clone());
    let geocoder = Geocoder::new(config.geocoder_url.clone());
    let rasterizer: Arc<dyn Rasterizer> = Arc::new(WkhtmlRasterizer::new(config.raster_binary.clone()));

    let state = AppState::new(
        config.clone(),
        trips,
        controller,
        fragments,
        geocoder,
        rasterizer,
    );

    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,waybill=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
