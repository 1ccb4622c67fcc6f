//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed
//! by request handlers. The state is initialized once during startup and then cloned
//! for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: `DatabaseConnection` is a connection pool and clones share it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Repositories and services borrow this connection for the duration of a
    /// request; it holds no other in-process mutable state.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
