// Review endpoints

use axum::{
    extract::{Path, State},
    response::Json,
};
use mongodb::bson::Document;
use tracing::error;

use super::common::{internal_error, ApiResult};
use crate::database::{InsertAck, Review};
use crate::web::AppState;

/// Add a review; `createdAt` is assigned by the server
pub async fn create_review(
    State(state): State<AppState>,
    Json(body): Json<Document>,
) -> ApiResult<InsertAck> {
    match state.store.insert_review(body).await {
        Ok(ack) => Ok(Json(ack)),
        Err(e) => {
            error!("Failed to insert review: {}", e);
            Err(internal_error(e))
        }
    }
}

/// Get all reviews for a service
pub async fn get_service_reviews(
    Path(service_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Vec<Review>> {
    match state.store.reviews_for_service(&service_id).await {
        Ok(reviews) => Ok(Json(reviews)),
        Err(e) => {
            error!("Failed to fetch reviews for service {}: {}", service_id, e);
            Err(internal_error(e))
        }
    }
}

/// Get reviews written by a user
pub async fn get_user_reviews(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Vec<Review>> {
    match state.store.reviews_for_user(&user_id).await {
        Ok(reviews) => Ok(Json(reviews)),
        Err(e) => {
            error!("Failed to fetch reviews for user {}: {}", user_id, e);
            Err(internal_error(e))
        }
    }
}
