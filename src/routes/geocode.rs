use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/geocode", get(reverse))
}

#[derive(Debug, Deserialize)]
struct GeoQuery {
    lat: f64,
    lon: f64,
}

async fn reverse(
    State(state): State<AppState>,
    Query(query): Query<GeoQuery>,
) -> Result<impl IntoResponse, AppError> {
    let address = state.geocoder.reverse(query.lat, query.lon).await?;
    Ok(address)
}
