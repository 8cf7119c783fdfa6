//! Record types stored in and returned from the collections.
//!
//! `Service` and `User` profiles are opaque to this layer and stay raw
//! `Document`s. Bookings and reviews have a small typed core (references,
//! status, creation timestamp) with everything else flattened through.
//! The `userId`/`serviceId` references are weak: plain strings that may be
//! malformed or point at deleted records, so they default to empty rather
//! than failing deserialization of a legacy document.

use mongodb::bson::{oid::ObjectId, DateTime, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_oid_hex"
    )]
    pub id: Option<ObjectId>,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(rename = "serviceId", default)]
    pub service_id: String,
    /// Open set: "pending" is injected at creation, other values arrive
    /// via the status-update operation.
    #[serde(default)]
    pub status: String,
    #[serde(
        rename = "createdAt",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_datetime_rfc3339"
    )]
    pub created_at: Option<DateTime>,
    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_oid_hex"
    )]
    pub id: Option<ObjectId>,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(rename = "serviceId", default)]
    pub service_id: String,
    #[serde(
        rename = "createdAt",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_datetime_rfc3339"
    )]
    pub created_at: Option<DateTime>,
    /// Free-form review content.
    #[serde(flatten)]
    pub extra: Document,
}

// ============================================================================
// Storage acknowledgements
// ============================================================================
//
// Wire shapes mirror the MongoDB driver's result documents. An update or
// delete against an absent id is not an error: it acknowledges with zero
// counts, and callers are expected to read the counts.

#[derive(Debug, Clone, Serialize)]
pub struct InsertAck {
    pub acknowledged: bool,
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateAck {
    pub acknowledged: bool,
    #[serde(rename = "matchedCount")]
    pub matched_count: u64,
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteAck {
    pub acknowledged: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

impl From<InsertOneResult> for InsertAck {
    fn from(result: InsertOneResult) -> Self {
        let inserted_id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

impl From<UpdateResult> for UpdateAck {
    fn from(result: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

impl From<DeleteResult> for DeleteAck {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}

/// Per-collection totals for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionCounts {
    pub users: u64,
    pub bookings: u64,
    pub reviews: u64,
    pub services: u64,
}

// ============================================================================
// Serde helpers
// ============================================================================
//
// Records deserialize from BSON (driver side) but serialize to JSON (HTTP
// side), so ids and timestamps get readable serializers while keeping the
// native BSON representations on the way in.

fn serialize_opt_oid_hex<S: Serializer>(
    oid: &Option<ObjectId>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match oid {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}

fn serialize_opt_datetime_rfc3339<S: Serializer>(
    dt: &Option<DateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match dt {
        Some(dt) => match dt.try_to_rfc3339_string() {
            Ok(formatted) => serializer.serialize_str(&formatted),
            Err(_) => serializer.serialize_i64(dt.timestamp_millis()),
        },
        None => serializer.serialize_none(),
    }
}
