//! HTTP request handlers for the WarmPaws API.
//!
//! This module is organized by resource:
//! - `admin` - Admin listings, counts, and booking management
//! - `bookings` - Booking creation, user listings, status updates
//! - `common` - Shared response types, query structs, and utilities
//! - `reviews` - Review creation and listings
//! - `services` - Service catalog CRUD
//! - `users` - User profile CRUD

pub mod admin;
pub mod bookings;
pub mod common;
pub mod reviews;
pub mod services;
pub mod users;

// Re-export all public handler functions for convenience
// Note: common module is internal, used only by sibling modules
pub use admin::*;
pub use bookings::*;
pub use reviews::*;
pub use services::*;
pub use users::*;
