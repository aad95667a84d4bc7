//! Songbook Server Library
//!
//! HTTP catalog service for a library of songs: CRUD, search and pagination
//! over a `SQLite` record store.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::catalog::{CatalogError, CatalogService};
pub use state::AppState;
