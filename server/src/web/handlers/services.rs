// Service catalog endpoints

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

/// Get all services
pub async fn get_services(State(state): State<AppState>) -> ApiResult<Vec<Document>> {
    match state.store.list_services().await {
        Ok(services) => Ok(Json(services)),
        Err(e) => {
            error!("Failed to list services: {}", e);
            Err(internal_error(e))
        }
    }
}

/// Get a single service, or null when the id matches nothing
pub async fn get_service(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Option<Document>> {
    let Some(oid) = parse_object_id(&id) else {
        return Err(invalid_id(&id));
    };

    match state.store.find_service(oid).await {
        Ok(service) => Ok(Json(service)),
        Err(e) => {
            error!("Failed to fetch service {}: {}", id, e);
            Err(internal_error(e))
        }
    }
}

/// Add a service
pub async fn create_service(
    State(state): State<AppState>,
    Json(body): Json<Document>,
) -> ApiResult<InsertAck> {
    match state.store.insert_service(body).await {
        Ok(ack) => Ok(Json(ack)),
        Err(e) => {
            error!("Failed to insert service: {}", e);
            Err(internal_error(e))
        }
    }
}

/// Merge the supplied fields into an existing service
pub async fn update_service(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<Document>,
) -> ApiResult<UpdateAck> {
    let Some(oid) = parse_object_id(&id) else {
        return Err(invalid_id(&id));
    };

    match state.store.update_service(oid, body).await {
        Ok(ack) => Ok(Json(ack)),
        Err(e) => {
            error!("Failed to update service {}: {}", id, e);
            Err(internal_error(e))
        }
    }
}

/// Delete a service; referencing bookings and reviews are left untouched
pub async fn delete_service(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<DeleteAck> {
    let Some(oid) = parse_object_id(&id) else {
        return Err(invalid_id(&id));
    };

    match state.store.delete_service(oid).await {
        Ok(ack) => Ok(Json(ack)),
        Err(e) => {
            error!("Failed to delete service {}: {}", id, e);
            Err(internal_error(e))
        }
    }
}
