//! todoctl-server: SQLite-backed todo HTTP service
//!
//! Exposes CRUD over a single todo item entity plus a toggle-complete
//! action. Schema initialization runs once at startup; every request is
//! an independent read or write against one table.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, AppState, ServerConfig};
