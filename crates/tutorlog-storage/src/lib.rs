// Postgres storage layer with sqlx
//
// This crate owns the bounded connection pool and the append-only event
// table. The `Database` handle is constructed once at process start and
// dependency-injected into every route state; there is no process-wide
// singleton.

pub mod models;
pub mod repositories;

pub use models::*;
pub use repositories::Database;
