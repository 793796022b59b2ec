//! Analytics event route handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::error::Result;
use crate::events::{Event, EventType, NewEvent};
use crate::state::AppState;

/// Event list query parameters.
#[derive(Debug, Deserialize)]
pub struct EventQuery {
    /// Wire label of the event type to filter by.
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

/// Track one analytics event.
#[instrument(skip(state, event), fields(event_type = ?event.event_type))]
pub async fn track(
    State(state): State<AppState>,
    Json(event): Json<NewEvent>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    state.events().track(event)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Event tracked successfully" })),
    ))
}

/// List tracked events, optionally filtered by type.
///
/// An unknown type label matches nothing, it is not an error.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Result<Json<Vec<Event>>> {
    let filter = match query.event_type.as_deref() {
        Some(label) => match serde_json::from_value::<EventType>(json!(label)) {
            Ok(event_type) => Some(event_type),
            Err(_) => return Ok(Json(Vec::new())),
        },
        None => None,
    };

    let events = state.events().list(filter)?;
    Ok(Json(events))
}
