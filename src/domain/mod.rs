//! # Domain Layer
//!
//! Booking models, the daily slot grid and the error taxonomy.
//! This layer performs no I/O and knows nothing about storage backends.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
