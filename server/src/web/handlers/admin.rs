// Admin endpoints: full listings, booking management, dashboard analytics

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use tracing::error;

use super::common::{effective_limit, internal_error, invalid_id, ApiResult, RecentQuery};
use crate::database::{CollectionCounts, DeleteAck, Review};
use crate::ids::parse_object_id;
use crate::services::{enrichment, AdminBooking, BookingWithService};
use crate::web::AppState;

/// All bookings, newest first, with service and user attached. References
/// that are malformed or point at deleted records come back as null.
pub async fn get_admin_bookings(State(state): State<AppState>) -> ApiResult<Vec<AdminBooking>> {
    let bookings = match state.store.all_bookings().await {
        Ok(bookings) => bookings,
        Err(e) => {
            error!("Failed to fetch admin bookings: {}", e);
            return Err(internal_error(e));
        }
    };

    match enrichment::for_admin(bookings, state.store.services(), state.store.users()).await {
        Ok(enriched) => Ok(Json(enriched)),
        Err(e) => {
            error!("Failed to enrich admin bookings: {}", e);
            Err(internal_error(e))
        }
    }
}

/// The most recent bookings, service join only. `limit` defaults to 5 when
/// absent or invalid.
pub async fn get_recent_bookings(
    Query(query): Query<RecentQuery>,
    State(state): State<AppState>,
) -> ApiResult<Vec<BookingWithService>> {
    let limit = effective_limit(query.limit.as_deref());

    let bookings = match state.store.recent_bookings(limit).await {
        Ok(bookings) => bookings,
        Err(e) => {
            error!("Failed to fetch recent bookings: {}", e);
            return Err(internal_error(e));
        }
    };

    match enrichment::with_services(bookings, state.store.services()).await {
        Ok(enriched) => Ok(Json(enriched)),
        Err(e) => {
            error!("Failed to enrich recent bookings: {}", e);
            Err(internal_error(e))
        }
    }
}

/// Delete a booking
pub async fn delete_booking(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<DeleteAck> {
    let Some(oid) = parse_object_id(&id) else {
        return Err(invalid_id(&id));
    };

    match state.store.delete_booking(oid).await {
        Ok(ack) => Ok(Json(ack)),
        Err(e) => {
            error!("Failed to delete booking {}: {}", id, e);
            Err(internal_error(e))
        }
    }
}

/// All reviews, newest first
pub async fn get_admin_reviews(State(state): State<AppState>) -> ApiResult<Vec<Review>> {
    match state.store.all_reviews().await {
        Ok(reviews) => Ok(Json(reviews)),
        Err(e) => {
            error!("Failed to fetch admin reviews: {}", e);
            Err(internal_error(e))
        }
    }
}

/// Totals per collection for the dashboard
pub async fn get_counts(State(state): State<AppState>) -> ApiResult<CollectionCounts> {
    match state.store.collection_counts().await {
        Ok(counts) => Ok(Json(counts)),
        Err(e) => {
            error!("Failed to compute collection counts: {}", e);
            Err(internal_error(e))
        }
    }
}
