//! Parking slot bookings.
//!
//! - [`models`]: the `Booking` record and the check-in form
//! - [`logic`]: fee calculation and slot counts
//! - [`store`]: the client's in-memory booking sequence
//! - [`client`]: the `bookedSlots` REST client
//! - [`ids`]: time-based booking ids

pub mod client;
pub mod datetime;
pub mod error;
pub mod ids;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod store;

pub use client::{BookedSlotsApi, HttpBookedSlotsClient};
pub use error::SlotsError;
pub use ids::BookingIdGenerator;
pub use logic::{calculate_total, slot_summary, BookingTotals, SlotSummary};
pub use models::{Booking, CheckinForm, FormField};
pub use store::BookingStore;
