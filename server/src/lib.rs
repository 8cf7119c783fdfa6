pub mod config;
pub mod database;
pub mod errors;
pub mod ids;
pub mod services;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use database::Store;
pub use ids::{is_valid_object_id, parse_object_id};
pub use services::{AdminBooking, BookingWithService};
