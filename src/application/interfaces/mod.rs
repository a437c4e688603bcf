mod booking_repository;
mod catalog_repository;

pub use booking_repository::*;
pub use catalog_repository::*;
