use anyhow::Result;
use chrono::NaiveDate;

use crate::{DomainError, Provider, SlotGenerator};

use super::super::Container;

pub struct AvailabilityController<'a> {
    container: &'a Container,
}

impl<'a> AvailabilityController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn availability(&self, provider_id: &str, date: NaiveDate) -> Result<String> {
        let provider = self
            .container
            .catalog()
            .find_provider(provider_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Provider not found: {}", provider_id)))?;

        let use_case = self.container.availability_use_case();
        let free = use_case.available_slots(provider_id, date).await?;

        Ok(self.format_availability(&provider, date, &free))
    }

    fn format_availability(&self, provider: &Provider, date: NaiveDate, free: &[String]) -> String {
        if free.is_empty() {
            return format!("{} is fully booked on {}.", provider.name, date);
        }

        format!(
            "Available slots for {} ({}) on {} ({} of {}):\n{}",
            provider.name,
            provider.id,
            date,
            free.len(),
            SlotGenerator::len(),
            free.join(" ")
        )
    }
}
