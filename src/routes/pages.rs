use askama::Template;
use askama_axum::IntoResponse as AskamaTemplateResponse;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Form, Router,
};

use crate::{
    controller::InlineEdits,
    error::AppError,
    models::{
        draft::{DraftUpdate, TripDraft},
        trip::DriverProfile,
    },
    state::AppState,
    views::TripsListView,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/preview", post(preview))
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    header: String,
    footer: String,
    draft: TripDraft,
    profile: DriverProfile,
    inline: InlineEdits,
    submit_label: &'static str,
    preview: String,
    trips: String,
}

async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let controller = state.controller.lock().await;
    let preview = controller.preview().render()?;
    let records = state.trips.list().await?;
    let trips = TripsListView::from_records(&records).render()?;

    Ok(AskamaTemplateResponse::into_response(IndexTemplate {
        header: state.fragments.header().await,
        footer: state.fragments.footer().await,
        draft: controller.draft().clone(),
        profile: controller.profile().clone(),
        inline: controller.inline_edits(),
        submit_label: controller.submit_label(),
        preview,
        trips,
    }))
}

/// Called on every tracked field change; the draft is updated and the
/// recomputed preview fragment is returned in the same response.
async fn preview(
    State(state): State<AppState>,
    Form(form): Form<DraftUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let mut controller = state.controller.lock().await;
    controller.set_draft(&form);
    Ok(AskamaTemplateResponse::into_response(controller.preview()))
}
