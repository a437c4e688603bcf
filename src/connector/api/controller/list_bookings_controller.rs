use anyhow::Result;
use chrono::NaiveDate;

use crate::Booking;

use super::super::Container;

pub struct ListBookingsController<'a> {
    container: &'a Container,
}

impl<'a> ListBookingsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self, date: Option<NaiveDate>) -> Result<String> {
        let use_case = self.container.list_bookings_use_case();
        let bookings = match date {
            Some(date) => use_case.list_for_date(date).await?,
            None => use_case.list_all().await?,
        };
        Ok(self.format_booking_list(&bookings))
    }

    fn format_booking_list(&self, bookings: &[Booking]) -> String {
        if bookings.is_empty() {
            return "No bookings found.".to_string();
        }

        let mut output = format!("{} booking(s):\n\n", bookings.len());
        for booking in bookings {
            output.push_str(&format!("  {} ({})\n", booking.id(), booking.status().as_str()));
            output.push_str(&format!(
                "    {} {} with {}\n",
                booking.date(),
                booking.timeslot(),
                booking.provider_name()
            ));
            output.push_str(&format!(
                "    {} - {:.2}\n",
                booking.service_name(),
                booking.price()
            ));
            output.push_str(&format!(
                "    Customer: {} <{}> {}\n",
                booking.customer().name,
                booking.customer().email,
                booking.customer().phone
            ));
            output.push('\n');
        }

        output
    }
}
