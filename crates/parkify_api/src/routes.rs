// --- File: crates/parkify_api/src/routes.rs ---
use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handlers::{
    create_booked_slot_handler, delete_booked_slot_handler, get_booked_slot_handler,
    list_booked_slots_handler, BookedSlotsState,
};
use crate::repository::BookingRepository;

/// Router for the `bookedSlots` collection, mounted at the server root.
pub fn routes(repository: Arc<BookingRepository>) -> Router {
    let state = Arc::new(BookedSlotsState { repository });

    Router::new()
        .route(
            "/bookedSlots",
            get(list_booked_slots_handler).post(create_booked_slot_handler),
        )
        .route(
            "/bookedSlots/{id}",
            get(get_booked_slot_handler).delete(delete_booked_slot_handler),
        )
        .with_state(state)
}
