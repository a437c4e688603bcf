use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{BookingLoad, BookingRepository};
use crate::domain::{Booking, DomainError};

pub struct InMemoryBookingRepository {
    bookings: Arc<Mutex<Vec<Booking>>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Seeds the store without conflict checks, as if loaded from elsewhere.
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Arc::new(Mutex::new(bookings)),
        }
    }

    pub async fn len(&self) -> usize {
        self.bookings.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bookings.lock().await.is_empty()
    }
}

impl Default for InMemoryBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn load_all(&self) -> Result<BookingLoad, DomainError> {
        let bookings = self.bookings.lock().await;
        Ok(BookingLoad::Loaded(bookings.clone()))
    }

    async fn append(&self, booking: &Booking) -> Result<(), DomainError> {
        let mut bookings = self.bookings.lock().await;

        if bookings
            .iter()
            .any(|b| b.occupies(booking.provider_id(), booking.date(), booking.timeslot()))
        {
            return Err(DomainError::slot_conflict(
                booking.provider_id(),
                booking.date(),
                booking.timeslot(),
            ));
        }

        bookings.push(booking.clone());
        debug!("Stored booking {} in memory ({} total)", booking.id(), bookings.len());
        Ok(())
    }
}
