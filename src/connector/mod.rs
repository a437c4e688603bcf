//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Booking storage (in-memory, JSON file, DuckDB)
//! - The service/provider catalog
//! - The CLI container, router and controllers

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
