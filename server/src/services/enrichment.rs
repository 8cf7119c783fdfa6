//! Booking enrichment: attaching denormalized `service` and `user`
//! sub-documents to booking listings for read convenience.
//!
//! References are weak. A `serviceId` or `userId` may be malformed, empty,
//! or point at a deleted record, and every one of those cases resolves to
//! `null` in the output — bookings are never dropped and the join never
//! fails on a bad reference. Related records are fetched with one batch
//! `$in` lookup per collection, never one lookup per booking.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;

use crate::database::Booking;
use crate::ids::is_valid_object_id;

/// A booking with its service attached, as returned by user-facing and
/// recent-bookings listings.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BookingWithService {
    #[serde(flatten)]
    pub booking: Booking,
    pub service: Option<Document>,
}

/// A booking with both joins attached, as returned by the admin listing.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AdminBooking {
    #[serde(flatten)]
    pub booking: Booking,
    pub service: Option<Document>,
    pub user: Option<Document>,
}

/// Seam over the batch lookup so the join logic is testable without a
/// running deployment.
pub trait RelatedCollection {
    fn find_by_ids(
        &self,
        ids: &[ObjectId],
    ) -> impl std::future::Future<Output = Result<Vec<Document>>> + Send;
}

impl RelatedCollection for Collection<Document> {
    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Document>> {
        let cursor = self.find(doc! { "_id": { "$in": ids.to_vec() } }).await?;
        Ok(cursor.try_collect().await?)
    }
}

/// Attaches the related service to each booking. Input order is preserved.
pub async fn with_services(
    bookings: Vec<Booking>,
    services: &impl RelatedCollection,
) -> Result<Vec<BookingWithService>> {
    // An empty listing issues no lookup at all.
    if bookings.is_empty() {
        return Ok(Vec::new());
    }

    let service_ids = valid_ref_ids(bookings.iter().map(|b| b.service_id.as_str()));
    let service_map = index_by_id(services.find_by_ids(&service_ids).await?);

    Ok(bookings
        .into_iter()
        .map(|booking| {
            let service = service_map.get(&booking.service_id).cloned();
            BookingWithService { booking, service }
        })
        .collect())
}

/// Attaches both the related service and the related user to each booking.
/// The two batch lookups run concurrently.
pub async fn for_admin(
    bookings: Vec<Booking>,
    services: &impl RelatedCollection,
    users: &impl RelatedCollection,
) -> Result<Vec<AdminBooking>> {
    if bookings.is_empty() {
        return Ok(Vec::new());
    }

    let service_ids = valid_ref_ids(bookings.iter().map(|b| b.service_id.as_str()));
    let user_ids = valid_ref_ids(bookings.iter().map(|b| b.user_id.as_str()));

    let (services_found, users_found) = tokio::try_join!(
        services.find_by_ids(&service_ids),
        users.find_by_ids(&user_ids),
    )?;

    let service_map = index_by_id(services_found);
    let user_map = index_by_id(users_found);

    Ok(bookings
        .into_iter()
        .map(|booking| {
            let service = service_map.get(&booking.service_id).cloned();
            let user = user_map.get(&booking.user_id).cloned();
            AdminBooking {
                booking,
                service,
                user,
            }
        })
        .collect())
}

/// Collects the references that pass the identifier validator, deduplicated
/// and in first-seen order. Malformed references never reach the parser.
fn valid_ref_ids<'a>(refs: impl Iterator<Item = &'a str>) -> Vec<ObjectId> {
    let mut seen = HashSet::new();
    refs.filter(|value| is_valid_object_id(value))
        .filter(|value| seen.insert(value.to_string()))
        .filter_map(|value| ObjectId::parse_str(value).ok())
        .collect()
}

/// Indexes fetched documents by the hex form of their `_id`, matching the
/// string form the booking references are stored in.
fn index_by_id(docs: Vec<Document>) -> HashMap<String, Document> {
    docs.into_iter()
        .filter_map(|doc| {
            let key = doc.get_object_id("_id").ok()?.to_hex();
            Some((key, doc))
        })
        .collect()
}
