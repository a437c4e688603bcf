use async_trait::async_trait;
use tracing::warn;

use crate::domain::{Booking, DomainError};

/// Outcome of decoding the stored booking collection.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingLoad {
    /// Decoded records in creation order. An empty or missing medium is `Loaded(vec![])`.
    Loaded(Vec<Booking>),
    /// The medium holds content that does not decode as bookings.
    Corrupt { reason: String },
}

/// What readers do when the store cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptStorePolicy {
    /// Surface `DomainError::StorageCorrupt`.
    #[default]
    Strict,
    /// Treat the store as empty and log a warning.
    Lenient,
}

impl BookingLoad {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, BookingLoad::Corrupt { .. })
    }

    pub fn into_bookings(self, policy: CorruptStorePolicy) -> Result<Vec<Booking>, DomainError> {
        match (self, policy) {
            (BookingLoad::Loaded(bookings), _) => Ok(bookings),
            (BookingLoad::Corrupt { reason }, CorruptStorePolicy::Strict) => {
                Err(DomainError::storage_corrupt(reason))
            }
            (BookingLoad::Corrupt { reason }, CorruptStorePolicy::Lenient) => {
                warn!("Booking store is corrupt ({}), treating it as empty", reason);
                Ok(Vec::new())
            }
        }
    }
}

/// Persistence for committed bookings.
///
/// Implementations must make `append` a conditional insert: the
/// occupancy check on (provider, date, timeslot) and the write happen in one
/// critical section, and an occupied key yields `DomainError::SlotConflict`.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Loads every stored booking in creation order.
    async fn load_all(&self) -> Result<BookingLoad, DomainError>;

    /// Appends a booking unless its slot is already taken.
    async fn append(&self, booking: &Booking) -> Result<(), DomainError>;
}
