use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;

use crate::{
    error::AppError,
    models::{
        property::SavedProperty,
        response::{DeletePropertyResponse, SavePropertyResponse},
    },
    AppState,
};

/// Handler for POST /save_property
pub async fn save_property(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SavePropertyResponse>, AppError> {
    let Json(record) = payload.map_err(|rejection| AppError::InvalidRecord(rejection.body_text()))?;

    let id = state.registry.save(record).await?;

    Ok(Json(SavePropertyResponse { success: true, id }))
}

/// Handler for GET /get_saved_properties
pub async fn get_saved_properties(State(state): State<AppState>) -> Json<Vec<SavedProperty>> {
    let properties = state.registry.list_all().await;
    tracing::debug!("Listing {} saved properties", properties.len());
    Json(properties)
}

/// Handler for DELETE /delete_property/{id}
/// Succeeds whether or not the id exists
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<DeletePropertyResponse> {
    let success = state.registry.delete(id).await;
    Json(DeletePropertyResponse { success })
}
