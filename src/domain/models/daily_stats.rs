use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Booking, BookingStatus, SlotGenerator};

/// Per-date counts, remaining capacity and revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub confirmed_count: usize,
    pub pending_count: usize,
    pub available_count: usize,
    pub total_bookings: usize,
    pub revenue: Decimal,
}

impl DailyStats {
    /// Aggregates the bookings of `date` out of `bookings`.
    ///
    /// `available_count` is grid size times provider count minus every
    /// booking on the date, so it is only exact while slots are unique.
    pub fn compute(date: NaiveDate, bookings: &[Booking], provider_count: usize) -> Self {
        let mut stats = Self {
            date,
            confirmed_count: 0,
            pending_count: 0,
            available_count: 0,
            total_bookings: 0,
            revenue: Decimal::ZERO,
        };

        for booking in bookings.iter().filter(|b| b.date() == date) {
            stats.total_bookings += 1;
            match booking.status() {
                BookingStatus::Confirmed => {
                    stats.confirmed_count += 1;
                    stats.revenue += booking.price();
                }
                BookingStatus::Pending => stats.pending_count += 1,
            }
        }

        stats.available_count =
            (SlotGenerator::len() * provider_count).saturating_sub(stats.total_bookings);
        stats
    }

    pub fn formatted_revenue(&self) -> String {
        format!("{:.2}", self.revenue)
    }
}
