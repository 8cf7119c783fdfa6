//! User profile operations. Profiles are opaque documents; the interesting
//! consumer of this collection is the admin enrichment join, which goes
//! through the `users()` handle directly.

use anyhow::Result;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};

use super::{DeleteAck, InsertAck, Store, UpdateAck};

impl Store {
    pub async fn list_users(&self) -> Result<Vec<Document>> {
        let cursor = self.users().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_user(&self, id: ObjectId) -> Result<Option<Document>> {
        Ok(self.users().find_one(doc! { "_id": id }).await?)
    }

    pub async fn insert_user(&self, user: Document) -> Result<InsertAck> {
        let result = self.users().insert_one(user).await?;
        Ok(result.into())
    }

    pub async fn update_user(&self, id: ObjectId, fields: Document) -> Result<UpdateAck> {
        let result = self
            .users()
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(result.into())
    }

    /// No cascade: the user's bookings and reviews stay behind with
    /// dangling references.
    pub async fn delete_user(&self, id: ObjectId) -> Result<DeleteAck> {
        let result = self.users().delete_one(doc! { "_id": id }).await?;
        Ok(result.into())
    }
}
