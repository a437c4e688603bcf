use anyhow::{anyhow, Result};

use crate::{Booking, BookingDraft, DomainError};

use super::super::Container;

pub struct BookingController<'a> {
    container: &'a Container,
}

impl<'a> BookingController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn book(&self, draft: BookingDraft) -> Result<String> {
        let use_case = self.container.create_booking_use_case();

        match use_case.execute(&draft).await {
            Ok(booking) => Ok(self.format_booking(&booking)),
            Err(DomainError::SlotConflict {
                provider_id,
                date,
                timeslot,
            }) => {
                let free = self
                    .container
                    .availability_use_case()
                    .available_slots(&provider_id, date)
                    .await?;
                Err(anyhow!(
                    "Slot {} on {} was just taken. Still available: {}",
                    timeslot,
                    date,
                    if free.is_empty() {
                        "none".to_string()
                    } else {
                        free.join(" ")
                    }
                ))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn format_booking(&self, booking: &Booking) -> String {
        format!(
            "Booking confirmed: {}\n  Service:  {} ({} min, {:.2})\n  Provider: {}\n  When:     {} {}\n  Customer: {} <{}> {}",
            booking.id(),
            booking.service_name(),
            booking.duration_minutes(),
            booking.price(),
            booking.provider_name(),
            booking.date(),
            booking.timeslot(),
            booking.customer().name,
            booking.customer().email,
            booking.customer().phone,
        )
    }
}
