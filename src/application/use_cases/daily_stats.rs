use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::{BookingRepository, CatalogRepository, CorruptStorePolicy};
use crate::domain::{DailyStats, DomainError};

pub struct DailyStatsUseCase {
    booking_repo: Arc<dyn BookingRepository>,
    catalog: Arc<dyn CatalogRepository>,
    corrupt_policy: CorruptStorePolicy,
}

impl DailyStatsUseCase {
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

    pub async fn summarize(&self, date: NaiveDate) -> Result<DailyStats, DomainError> {
        let bookings = self
            .booking_repo
            .load_all()
            .await?
            .into_bookings(self.corrupt_policy)?;
        let provider_count = self.catalog.providers().await?.len();

        Ok(DailyStats::compute(date, &bookings, provider_count))
    }
}
