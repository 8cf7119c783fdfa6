//! Storage layer for the booking server.
//!
//! One MongoDB client, connected at startup and shared through `Arc` — the
//! collection handles live here instead of in process-wide globals. The
//! module is organized into submodules:
//! - `records` - Record types and acknowledgements
//! - `services` - Service catalog CRUD
//! - `bookings` - Booking CRUD and listings
//! - `reviews` - Review CRUD and listings
//! - `users` - User lookups

mod bookings;
mod records;
mod reviews;
mod services;
mod users;

pub use records::*;

use anyhow::Result;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};
use tracing::{error, info};

use crate::config::Config;
use crate::errors::StoreError;

pub struct Store {
    client: Client,
    services: Collection<Document>,
    bookings: Collection<Booking>,
    reviews: Collection<Review>,
    users: Collection<Document>,
}

impl Store {
    pub async fn connect(config: &Config) -> Result<Self> {
        info!("Connecting to MongoDB...");

        let client = match Client::with_uri_str(&config.mongo_uri).await {
            Ok(client) => client,
            Err(e) => {
                error!("FAILED to connect to MongoDB: {}", e);
                return Err(StoreError::ConnectionFailed {
                    reason: e.to_string(),
                }
                .into());
            }
        };

        let db = client.database(&config.database);

        // Connection setup is lazy; a ping proves the deployment is reachable
        // before any request traffic arrives.
        if let Err(e) = db.run_command(doc! { "ping": 1 }).await {
            error!("Database ping failed for '{}': {}", config.database, e);
            return Err(StoreError::PingFailed {
                database: config.database.clone(),
                reason: e.to_string(),
            }
            .into());
        }

        let store = Self {
            services: db.collection("services"),
            bookings: db.collection("bookings"),
            reviews: db.collection("reviews"),
            users: db.collection("users"),
            client,
        };

        info!("MongoDB connected, database '{}'", config.database);
        Ok(store)
    }

    /// Service documents, as consumed by the enrichment join.
    pub fn services(&self) -> &Collection<Document> {
        &self.services
    }

    /// User documents, as consumed by the enrichment join.
    pub fn users(&self) -> &Collection<Document> {
        &self.users
    }

    /// Totals per collection, issued concurrently.
    pub async fn collection_counts(&self) -> Result<CollectionCounts> {
        let (users, bookings, reviews, services) = tokio::try_join!(
            self.users.count_documents(doc! {}),
            self.bookings.count_documents(doc! {}),
            self.reviews.count_documents(doc! {}),
            self.services.count_documents(doc! {}),
        )?;

        Ok(CollectionCounts {
            users,
            bookings,
            reviews,
            services,
        })
    }

    /// Tears the client down cleanly on shutdown.
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}
