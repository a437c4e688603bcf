use std::sync::Arc;

use tracing::{info, warn};

use crate::application::{BookingRepository, CatalogRepository, CorruptStorePolicy};
use crate::domain::{Booking, BookingDraft, DomainError};

/// Validates a draft and commits it as a confirmed booking.
pub struct CreateBookingUseCase {
    booking_repo: Arc<dyn BookingRepository>,
    catalog: Arc<dyn CatalogRepository>,
    corrupt_policy: CorruptStorePolicy,
}

impl CreateBookingUseCase {
    pub fn new(
        booking_repo: Arc<dyn BookingRepository>,
        catalog: Arc<dyn CatalogRepository>,
    ) -> Self {
        Self {
            booking_repo,
            catalog,
            corrupt_policy: CorruptStorePolicy::default(),
        }
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptStorePolicy) -> Self {
        self.corrupt_policy = policy;
        self
    }

    /// Validation runs in a fixed order (selection, schedule, customer) and
    /// completes before anything is written.
    pub async fn execute(&self, draft: &BookingDraft) -> Result<Booking, DomainError> {
        let (service_id, provider_id) = draft.selection()?;

        let service = self.catalog.find_service(service_id).await?.ok_or_else(|| {
            DomainError::missing_selection(format!("unknown service '{}'", service_id))
        })?;
        let provider = self.catalog.find_provider(provider_id).await?.ok_or_else(|| {
            DomainError::missing_selection(format!("unknown provider '{}'", provider_id))
        })?;

        let (date, timeslot) = draft.schedule()?;
        let customer = draft.customer()?;

        let booking = Booking::new(&service, &provider, date, timeslot, customer);

        // Availability shown to the caller may be stale by now.
        let existing = self
            .booking_repo
            .load_all()
            .await?
            .into_bookings(self.corrupt_policy)?;
        if existing
            .iter()
            .any(|b| b.occupies(&provider.id, date, timeslot))
        {
            warn!(
                "Rejected booking for {} on {} at {}: slot already taken",
                provider.id, date, timeslot
            );
            return Err(DomainError::slot_conflict(&provider.id, date, timeslot));
        }

        self.booking_repo.append(&booking).await?;

        info!("Created booking {}", booking.summary());

        Ok(booking)
    }
}
