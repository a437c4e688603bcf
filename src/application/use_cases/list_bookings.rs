use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::{BookingRepository, CorruptStorePolicy};
use crate::domain::{Booking, DomainError};

pub struct ListBookingsUseCase {
    booking_repo: Arc<dyn BookingRepository>,
    corrupt_policy: CorruptStorePolicy,
}

impl ListBookingsUseCase {
    pub fn new(booking_repo: Arc<dyn BookingRepository>) -> Self {
        Self {
            booking_repo,
            corrupt_policy: CorruptStorePolicy::default(),
        }
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptStorePolicy) -> Self {
        self.corrupt_policy = policy;
        self
    }

    pub async fn list_all(&self) -> Result<Vec<Booking>, DomainError> {
        self.booking_repo
            .load_all()
            .await?
            .into_bookings(self.corrupt_policy)
    }

    pub async fn list_for_date(&self, date: NaiveDate) -> Result<Vec<Booking>, DomainError> {
        let mut bookings = self.list_all().await?;
        bookings.retain(|b| b.date() == date);
        Ok(bookings)
    }
}
