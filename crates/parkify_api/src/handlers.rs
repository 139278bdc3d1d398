// --- File: crates/parkify_api/src/handlers.rs ---
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Json, Response},
};
use parkify_common::{handle_json_result, ParkifyError};
use parkify_slots::Booking;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::repository::BookingRepository;

#[derive(Clone)]
pub struct BookedSlotsState {
    pub repository: Arc<BookingRepository>,
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookedSlots",
    responses(
        (status = 200, description = "Every booking, in insertion order", body = [Booking])
    ),
    tag = "Booked Slots"
))]
pub async fn list_booked_slots_handler(
    State(state): State<Arc<BookedSlotsState>>,
) -> Json<Vec<Booking>> {
    Json(state.repository.list().await)
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookedSlots/{id}",
    params(("id" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "The booking", body = Booking),
        (status = 404, description = "No booking with this id")
    ),
    tag = "Booked Slots"
))]
pub async fn get_booked_slot_handler(
    State(state): State<Arc<BookedSlotsState>>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, Response> {
    handle_json_result(state.repository.get(&id).await)
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookedSlots",
    request_body = Booking,
    responses(
        (status = 201, description = "Booking stored", body = Booking),
        (status = 409, description = "A booking with this id already exists")
    ),
    tag = "Booked Slots"
))]
pub async fn create_booked_slot_handler(
    State(state): State<Arc<BookedSlotsState>>,
    Json(booking): Json<Booking>,
) -> Result<(StatusCode, Json<Booking>), ParkifyError> {
    let stored = state.repository.insert(booking).await?;
    info!(
        "Checked in {} ({}) on slot {:?}",
        stored.car_number, stored.id, stored.slot_index
    );
    Ok((StatusCode::CREATED, Json(stored)))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/bookedSlots/{id}",
    params(("id" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking removed"),
        (status = 404, description = "No booking with this id")
    ),
    tag = "Booked Slots"
))]
pub async fn delete_booked_slot_handler(
    State(state): State<Arc<BookedSlotsState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ParkifyError> {
    let removed = state.repository.remove(&id).await?;
    info!("Cleared booking {} for {}", removed.id, removed.car_number);
    Ok(Json(json!({})))
}
