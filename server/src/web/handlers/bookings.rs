// Booking endpoints

use axum::{
    extract::{Path, State},
    response::Json,
};
use mongodb::bson::Document;
use tracing::error;

use super::common::{internal_error, invalid_id, ApiResult, StatusUpdate};
use crate::database::{InsertAck, UpdateAck};
use crate::ids::parse_object_id;
use crate::services::{enrichment, BookingWithService};
use crate::web::AppState;

/// Create a booking. `createdAt` and `status: "pending"` are assigned by
/// the server regardless of what the body contains.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<Document>,
) -> ApiResult<InsertAck> {
    match state.store.insert_booking(body).await {
        Ok(ack) => Ok(Json(ack)),
        Err(e) => {
            error!("Failed to insert booking: {}", e);
            Err(internal_error(e))
        }
    }
}

/// Get a user's bookings, newest first, each with its service attached
pub async fn get_user_bookings(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Vec<BookingWithService>> {
    let bookings = match state.store.bookings_for_user(&user_id).await {
        Ok(bookings) => bookings,
        Err(e) => {
            error!("Failed to fetch bookings for user {}: {}", user_id, e);
            return Err(internal_error(e));
        }
    };

    match enrichment::with_services(bookings, state.store.services()).await {
        Ok(enriched) => Ok(Json(enriched)),
        Err(e) => {
            error!("Failed to enrich bookings for user {}: {}", user_id, e);
            Err(internal_error(e))
        }
    }
}

/// Update exactly the booking's `status` field
pub async fn update_booking_status(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<StatusUpdate>,
) -> ApiResult<UpdateAck> {
    let Some(oid) = parse_object_id(&id) else {
        return Err(invalid_id(&id));
    };

    match state.store.set_booking_status(oid, &body.status).await {
        Ok(ack) => Ok(Json(ack)),
        Err(e) => {
            error!("Failed to update status of booking {}: {}", id, e);
            Err(internal_error(e))
        }
    }
}
