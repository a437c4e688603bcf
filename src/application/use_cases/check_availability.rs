use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::application::{BookingRepository, CorruptStorePolicy};
use crate::domain::{DomainError, SlotGenerator};

/// Computes free slots for a provider on a date from current store state.
pub struct CheckAvailabilityUseCase {
    booking_repo: Arc<dyn BookingRepository>,
    corrupt_policy: CorruptStorePolicy,
}

impl CheckAvailabilityUseCase {
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

    /// Grid slots not held by any booking of `provider_id` on `date`, in grid order.
    pub async fn available_slots(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<String>, DomainError> {
        let bookings = self
            .booking_repo
            .load_all()
            .await?
            .into_bookings(self.corrupt_policy)?;

        let taken: HashSet<&str> = bookings
            .iter()
            .filter(|b| b.is_for(provider_id, date) && b.status().occupies_slot())
            .map(|b| b.timeslot())
            .collect();

        let free: Vec<String> = SlotGenerator::generate()
            .into_iter()
            .filter(|slot| !taken.contains(slot.as_str()))
            .collect();

        debug!(
            "Provider {} on {}: {} free, {} taken",
            provider_id,
            date,
            free.len(),
            taken.len()
        );

        Ok(free)
    }

    pub async fn is_available(
        &self,
        provider_id: &str,
        date: NaiveDate,
        timeslot: &str,
    ) -> Result<bool, DomainError> {
        let free = self.available_slots(provider_id, date).await?;
        Ok(free.iter().any(|slot| slot == timeslot))
    }
}
