// --- File: crates/parkify_api/src/doc.rs ---
use parkify_slots::Booking;
use utoipa::OpenApi;

/// OpenAPI documentation for the booked-slots collection
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::list_booked_slots_handler,
        crate::handlers::get_booked_slot_handler,
        crate::handlers::create_booked_slot_handler,
        crate::handlers::delete_booked_slot_handler
    ),
    components(schemas(Booking)),
    tags(
        (name = "Booked Slots", description = "Parking check-ins held in the bookedSlots collection")
    )
)]
pub struct BookedSlotsApiDoc;
