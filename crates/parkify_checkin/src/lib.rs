//! Terminal check-in page for the parking slot grid.
//!
//! - [`page`]: page state and UI events (mount, change, submit, slot click)
//! - [`render`]: text rendering of the header, counts, grid and dialog
//! - [`session`]: the interactive command loop
//! - [`cli`]: one-shot commands

pub mod cli;
pub mod page;
#[cfg(test)]
mod page_test;
pub mod render;
pub mod session;
#[cfg(test)]
mod test_support;

pub use page::{CheckinPage, SlotClick, SubmitOutcome, CAPACITY_WARNING};
