//! Booking operations.
//!
//! Listings are always newest-first (`createdAt` descending). Creation
//! injects the server-assigned fields: whatever the client sent for
//! `createdAt` or `status` is overwritten.

use anyhow::Result;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};

use super::{Booking, DeleteAck, InsertAck, Store, UpdateAck};

/// Server-assigned fields for a new booking. Client-supplied values for
/// `createdAt` or `status` are overwritten, never trusted.
fn with_booking_defaults(mut booking: Document) -> Document {
    booking.insert("createdAt", DateTime::now());
    booking.insert("status", "pending");
    booking
}

impl Store {
    pub async fn insert_booking(&self, booking: Document) -> Result<InsertAck> {
        let result = self
            .bookings
            .clone_with_type::<Document>()
            .insert_one(with_booking_defaults(booking))
            .await?;
        Ok(result.into())
    }

    pub async fn bookings_for_user(&self, user_id: &str) -> Result<Vec<Booking>> {
        let cursor = self
            .bookings
            .find(doc! { "userId": user_id })
            .sort(doc! { "createdAt": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn all_bookings(&self) -> Result<Vec<Booking>> {
        let cursor = self
            .bookings
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn recent_bookings(&self, limit: i64) -> Result<Vec<Booking>> {
        let cursor = self
            .bookings
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Updates exactly the `status` field, nothing else.
    pub async fn set_booking_status(&self, id: ObjectId, status: &str) -> Result<UpdateAck> {
        let result = self
            .bookings
            .update_one(doc! { "_id": id }, doc! { "$set": { "status": status } })
            .await?;
        Ok(result.into())
    }

    pub async fn delete_booking(&self, id: ObjectId) -> Result<DeleteAck> {
        let result = self.bookings.delete_one(doc! { "_id": id }).await?;
        Ok(result.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bookings_get_pending_status_and_a_timestamp() {
        let body = doc! { "userId": "u1", "serviceId": "s1" };

        let stored = with_booking_defaults(body);

        assert_eq!(stored.get_str("status").unwrap(), "pending");
        assert!(stored.get_datetime("createdAt").is_ok());
        // Client fields pass through untouched
        assert_eq!(stored.get_str("userId").unwrap(), "u1");
        assert_eq!(stored.get_str("serviceId").unwrap(), "s1");
    }

    #[test]
    fn client_supplied_server_fields_are_overwritten() {
        let body = doc! {
            "userId": "u1",
            "serviceId": "s1",
            "status": "confirmed",
            "createdAt": "2001-01-01T00:00:00Z",
        };
        let before = DateTime::now();

        let stored = with_booking_defaults(body);

        assert_eq!(stored.get_str("status").unwrap(), "pending");
        let created = stored.get_datetime("createdAt").unwrap();
        assert!(created.timestamp_millis() >= before.timestamp_millis());
    }
}
