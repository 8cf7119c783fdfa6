//! Unit tests for record wire shapes
//!
//! Records deserialize from BSON documents coming out of the driver and
//! serialize to JSON going out over HTTP; these tests pin both directions.

use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use serde_json::{json, Value};

use server::database::{Booking, CollectionCounts, DeleteAck, InsertAck, Review, UpdateAck};
use server::services::{AdminBooking, BookingWithService};

fn sample_booking() -> Booking {
    Booking {
        id: Some(ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap()),
        user_id: "u1".to_string(),
        service_id: "507f1f77bcf86cd799439012".to_string(),
        status: "pending".to_string(),
        created_at: Some(DateTime::from_millis(1_700_000_000_000)),
        extra: doc! { "note": "bring treats" },
    }
}

#[test]
fn booking_serializes_with_original_field_names() {
    let value = serde_json::to_value(sample_booking()).unwrap();

    assert_eq!(value["_id"], json!("507f1f77bcf86cd799439011"));
    assert_eq!(value["userId"], json!("u1"));
    assert_eq!(value["serviceId"], json!("507f1f77bcf86cd799439012"));
    assert_eq!(value["status"], json!("pending"));
    // DateTime comes out as an RFC 3339 string, not extended JSON
    assert!(value["createdAt"].as_str().unwrap().starts_with("2023-11-14T"));
    // Flattened extras keep their own keys
    assert_eq!(value["note"], json!("bring treats"));
}

#[test]
fn booking_deserializes_leniently_from_stored_documents() {
    // Legacy document: no status, no createdAt, missing serviceId.
    let stored = doc! { "_id": ObjectId::new(), "userId": "u7" };

    let booking: Booking = mongodb::bson::from_document(stored).unwrap();

    assert_eq!(booking.user_id, "u7");
    assert_eq!(booking.service_id, "");
    assert_eq!(booking.status, "");
    assert!(booking.created_at.is_none());
}

#[test]
fn review_roundtrips_free_form_content() {
    let stored = doc! {
        "_id": ObjectId::new(),
        "userId": "u1",
        "serviceId": "s-or-anything",
        "rating": 5,
        "comment": "great walker",
    };

    let review: Review = mongodb::bson::from_document(stored).unwrap();
    let value = serde_json::to_value(&review).unwrap();

    assert_eq!(value["userId"], json!("u1"));
    assert_eq!(value["rating"], json!(5));
    assert_eq!(value["comment"], json!("great walker"));
}

#[test]
fn enriched_booking_serializes_null_for_missing_service() {
    let enriched = BookingWithService {
        booking: sample_booking(),
        service: None,
    };

    let value = serde_json::to_value(&enriched).unwrap();

    // The key is present and explicitly null, not omitted.
    assert!(value.as_object().unwrap().contains_key("service"));
    assert_eq!(value["service"], Value::Null);
    assert_eq!(value["userId"], json!("u1"));
}

#[test]
fn admin_booking_carries_both_joins() {
    let service: Document = doc! { "_id": ObjectId::new(), "name": "Dog Walking" };
    let enriched = AdminBooking {
        booking: sample_booking(),
        service: Some(service),
        user: None,
    };

    let value = serde_json::to_value(&enriched).unwrap();

    assert_eq!(value["service"]["name"], json!("Dog Walking"));
    assert_eq!(value["user"], Value::Null);
}

#[test]
fn acknowledgements_use_driver_field_names() {
    let insert = InsertAck {
        acknowledged: true,
        inserted_id: "507f1f77bcf86cd799439011".to_string(),
    };
    let update = UpdateAck {
        acknowledged: true,
        matched_count: 1,
        modified_count: 0,
    };
    let delete = DeleteAck {
        acknowledged: true,
        deleted_count: 0,
    };

    assert_eq!(
        serde_json::to_value(&insert).unwrap(),
        json!({ "acknowledged": true, "insertedId": "507f1f77bcf86cd799439011" })
    );
    // A zero modified/deleted count is a normal acknowledgement, not an error.
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({ "acknowledged": true, "matchedCount": 1, "modifiedCount": 0 })
    );
    assert_eq!(
        serde_json::to_value(&delete).unwrap(),
        json!({ "acknowledged": true, "deletedCount": 0 })
    );
}

#[test]
fn counts_serialize_as_a_single_object() {
    let counts = CollectionCounts {
        users: 3,
        bookings: 2,
        reviews: 0,
        services: 1,
    };

    assert_eq!(
        serde_json::to_value(&counts).unwrap(),
        json!({ "users": 3, "bookings": 2, "reviews": 0, "services": 1 })
    );
}
