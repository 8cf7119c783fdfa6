//! Review operations. Creation injects the `createdAt` timestamp; content
//! is free-form and passes through untouched.

use anyhow::Result;
use futures::TryStreamExt;
use mongodb::bson::{doc, DateTime, Document};

use super::{InsertAck, Review, Store};

/// Server-assigned `createdAt` for a new review, overwriting any
/// client-supplied value.
fn with_review_defaults(mut review: Document) -> Document {
    review.insert("createdAt", DateTime::now());
    review
}

impl Store {
    pub async fn insert_review(&self, review: Document) -> Result<InsertAck> {
        let result = self
            .reviews
            .clone_with_type::<Document>()
            .insert_one(with_review_defaults(review))
            .await?;
        Ok(result.into())
    }

    pub async fn reviews_for_service(&self, service_id: &str) -> Result<Vec<Review>> {
        let cursor = self.reviews.find(doc! { "serviceId": service_id }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn reviews_for_user(&self, user_id: &str) -> Result<Vec<Review>> {
        let cursor = self.reviews.find(doc! { "userId": user_id }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn all_reviews(&self) -> Result<Vec<Review>> {
        let cursor = self
            .reviews
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reviews_get_a_server_assigned_timestamp() {
        let body = doc! { "userId": "u1", "serviceId": "s1", "comment": "great walker" };
        let before = DateTime::now();

        let stored = with_review_defaults(body);

        let created = stored.get_datetime("createdAt").unwrap();
        assert!(created.timestamp_millis() >= before.timestamp_millis());
        // Free-form content passes through untouched
        assert_eq!(stored.get_str("comment").unwrap(), "great walker");
    }

    #[test]
    fn client_supplied_created_at_is_overwritten() {
        let body = doc! { "userId": "u1", "createdAt": "2001-01-01T00:00:00Z" };

        let stored = with_review_defaults(body);

        // The string the client sent is gone, replaced by a real datetime.
        assert!(stored.get_datetime("createdAt").is_ok());
    }
}
