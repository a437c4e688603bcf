use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::{BookingRepository, CatalogRepository, CorruptStorePolicy};
use crate::domain::{BookingDraft, DaySchedule, DomainError};

/// Builds the slot-by-provider board for a date.
pub struct ViewScheduleUseCase {
    booking_repo: Arc<dyn BookingRepository>,
    catalog: Arc<dyn CatalogRepository>,
    corrupt_policy: CorruptStorePolicy,
}

impl ViewScheduleUseCase {
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

    pub async fn board(&self, date: NaiveDate) -> Result<DaySchedule, DomainError> {
        let bookings = self
            .booking_repo
            .load_all()
            .await?
            .into_bookings(self.corrupt_policy)?;
        let providers = self.catalog.providers().await?;

        Ok(DaySchedule::build(date, providers, &bookings))
    }

    /// Draft for an open cell. Keeps `preferred_service` when the caller
    /// already chose one, otherwise preselects the first catalog service.
    pub async fn quick_draft(
        &self,
        provider_id: &str,
        date: NaiveDate,
        timeslot: &str,
        preferred_service: Option<&str>,
    ) -> Result<Option<BookingDraft>, DomainError> {
        let service_id = match preferred_service {
            Some(id) => id.to_string(),
            None => self
                .catalog
                .services()
                .await?
                .into_iter()
                .next()
                .map(|service| service.id)
                .ok_or_else(|| DomainError::not_found("catalog has no services"))?,
        };

        let board = self.board(date).await?;
        Ok(board.quick_draft(provider_id, timeslot, &service_id))
    }
}
