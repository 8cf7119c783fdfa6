// User profile endpoints

use axum::{
    extract::{Path, State},
    response::Json,
};
use mongodb::bson::Document;
use tracing::error;

use super::common::{internal_error, invalid_id, ApiResult};
use crate::database::{DeleteAck, InsertAck, UpdateAck};
use crate::ids::parse_object_id;
use crate::web::AppState;

/// Get all users
pub async fn get_users(State(state): State<AppState>) -> ApiResult<Vec<Document>> {
    match state.store.list_users().await {
        Ok(users) => Ok(Json(users)),
        Err(e) => {
            error!("Failed to list users: {}", e);
            Err(internal_error(e))
        }
    }
}

/// Get a single user, or null when the id matches nothing
pub async fn get_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Option<Document>> {
    let Some(oid) = parse_object_id(&id) else {
        return Err(invalid_id(&id));
    };

    match state.store.find_user(oid).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => {
            error!("Failed to fetch user {}: {}", id, e);
            Err(internal_error(e))
        }
    }
}

/// Add a user profile
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Document>,
) -> ApiResult<InsertAck> {
    match state.store.insert_user(body).await {
        Ok(ack) => Ok(Json(ack)),
        Err(e) => {
            error!("Failed to insert user: {}", e);
            Err(internal_error(e))
        }
    }
}

/// Merge the supplied fields into an existing user profile
pub async fn update_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<Document>,
) -> ApiResult<UpdateAck> {
    let Some(oid) = parse_object_id(&id) else {
        return Err(invalid_id(&id));
    };

    match state.store.update_user(oid, body).await {
        Ok(ack) => Ok(Json(ack)),
        Err(e) => {
            error!("Failed to update user {}: {}", id, e);
            Err(internal_error(e))
        }
    }
}

/// Delete a user; their bookings and reviews are left behind with
/// dangling references
pub async fn delete_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<DeleteAck> {
    let Some(oid) = parse_object_id(&id) else {
        return Err(invalid_id(&id));
    };

    match state.store.delete_user(oid).await {
        Ok(ack) => Ok(Json(ack)),
        Err(e) => {
            error!("Failed to delete user {}: {}", id, e);
            Err(internal_error(e))
        }
    }
}
