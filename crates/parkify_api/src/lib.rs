//! The `bookedSlots` REST collection.
//!
//! Serves the resource the check-in client talks to:
//!
//! - `GET /bookedSlots`
//! - `GET /bookedSlots/{id}`
//! - `POST /bookedSlots`
//! - `DELETE /bookedSlots/{id}`
//!
//! Bookings live in memory, optionally mirrored to a JSON file. The
//! collection does not enforce the slot count; that is the client's rule.

#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod repository;
pub mod routes;

pub use repository::BookingRepository;
pub use routes::routes;

#[cfg(feature = "openapi")]
pub mod openapi {
    pub use crate::doc::BookedSlotsApiDoc;
}
