// File: server/src/web/mod.rs
pub mod handlers;
pub mod server;

pub use server::start_web_server;

use std::sync::Arc;

use crate::database::Store;

// Application state shared across all handlers. Config is consumed at
// startup (bind address, connection); requests only need the store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}
