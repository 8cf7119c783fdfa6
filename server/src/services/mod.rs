// File: server/src/services/mod.rs

pub mod enrichment;

pub use enrichment::{AdminBooking, BookingWithService, RelatedCollection};
