//! Service catalog operations. Profile fields are opaque: stored and
//! returned exactly as supplied.

use anyhow::Result;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};

use super::{DeleteAck, InsertAck, Store, UpdateAck};

impl Store {
    pub async fn list_services(&self) -> Result<Vec<Document>> {
        let cursor = self.services().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_service(&self, id: ObjectId) -> Result<Option<Document>> {
        Ok(self.services().find_one(doc! { "_id": id }).await?)
    }

    pub async fn insert_service(&self, service: Document) -> Result<InsertAck> {
        let result = self.services().insert_one(service).await?;
        Ok(result.into())
    }

    /// Partial update: only the supplied fields change. Updating an absent
    /// id acknowledges with a matched count of zero.
    pub async fn update_service(&self, id: ObjectId, fields: Document) -> Result<UpdateAck> {
        let result = self
            .services()
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(result.into())
    }

    /// No cascade: bookings and reviews referencing the service keep their
    /// dangling ids and resolve to null in enriched listings.
    pub async fn delete_service(&self, id: ObjectId) -> Result<DeleteAck> {
        let result = self.services().delete_one(doc! { "_id": id }).await?;
        Ok(result.into())
    }
}
