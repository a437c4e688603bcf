mod duckdb_booking_repository;
mod in_memory_booking_repository;
mod json_file_booking_repository;
mod static_catalog;

pub use duckdb_booking_repository::*;
pub use in_memory_booking_repository::*;
pub use json_file_booking_repository::*;
pub use static_catalog::*;
