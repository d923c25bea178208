use askama::Template;
use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};

use crate::{
    error::AppError,
    models::draft::DraftUpdate,
    services::raster::RasterOptions,
    state::AppState,
    views::{ExportPage, WaybillView},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trips", post(submit))
        .route("/trips/clear", post(clear_all))
        .route("/trips/:id/edit", post(enter_edit))
        .route("/trips/:id/delete", post(delete))
        .route("/trips/:id/export", get(export_record))
        .route("/export", get(export_live))
}

/// One submit endpoint for both modes; the controller's state machine
/// decides whether this appends a new record or updates one in place.
async fn submit(
    State(state): State<AppState>,
    Form(form): Form<DraftUpdate>,
) -> Result<Redirect, AppError> {
    let mut controller = state.controller.lock().await;
    controller.set_draft(&form);
    controller.submit().await?;
    Ok(Redirect::to("/"))
}

async fn enter_edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let mut controller = state.controller.lock().await;
    controller.enter_edit(&id).await?;
    Ok(Redirect::to("/"))
}

async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let index = state.trips.position_of(&id).await?.ok_or(AppError::NotFound)?;
    state.trips.remove_at(index).await?;
    Ok(Redirect::to("/"))
}

async fn clear_all(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.trips.clear().await?;
    Ok(Redirect::to("/"))
}

/// Exports the live preview exactly as currently drafted.
async fn export_live(State(state): State<AppState>) -> Result<Response, AppError> {
    let (id, view) = {
        let controller = state.controller.lock().await;
        (controller.draft().id.clone(), controller.preview())
    };
    render_and_download(&state, &id, view).await
}

/// Exports a saved record through a detached preview, hydrated from the
/// stored snapshot rather than the live form.
async fn export_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let record = state.trips.find(&id).await?.ok_or(AppError::NotFound)?;
    let view = WaybillView::from_record(&record);
    render_and_download(&state, &record.id, view).await
}

async fn render_and_download(
    state: &AppState,
    id: &str,
    view: WaybillView,
) -> Result<Response, AppError> {
    let page = ExportPage {
        waybill: view.render()?,
    };
    let bytes = state
        .rasterizer
        .rasterize(&page.render()?, &RasterOptions::default())
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/jpeg".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"waybill-{id}.jpg\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
