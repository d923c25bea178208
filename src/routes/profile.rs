use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    routing::post,
    Form, Router,
};
use serde::Deserialize;

use crate::{
    controller::{ProfileField, ProfileUpdate, ToggleOutcome},
    error::AppError,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", post(save))
        .route("/profile/toggle", post(toggle))
}

async fn save(
    State(state): State<AppState>,
    Form(form): Form<ProfileUpdate>,
) -> Result<Redirect, AppError> {
    let mut controller = state.controller.lock().await;
    controller.save_profile(&form).await?;
    Ok(Redirect::to("/"))
}

#[derive(Debug, Deserialize)]
struct ToggleForm {
    field: ProfileField,
    #[serde(default)]
    value: String,
}

/// Responds with the new label for the toggle control, so the client can
/// relabel it without knowing the controller state.
async fn toggle(
    State(state): State<AppState>,
    Form(form): Form<ToggleForm>,
) -> Result<impl IntoResponse, AppError> {
    let mut controller = state.controller.lock().await;
    let outcome = controller.toggle_field(form.field, &form.value).await?;
    Ok(match outcome {
        ToggleOutcome::Unlocked => "Save",
        ToggleOutcome::Committed => "Edit",
    })
}
