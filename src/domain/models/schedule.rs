use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Booking, BookingDraft, Provider, SlotGenerator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ScheduleCell {
    Available,
    Booked {
        booking_id: String,
        customer_name: String,
        service_name: String,
    },
}

impl ScheduleCell {
    pub fn is_available(&self) -> bool {
        matches!(self, ScheduleCell::Available)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub timeslot: String,
    /// One cell per provider, in `DaySchedule::providers` order.
    pub cells: Vec<ScheduleCell>,
}

/// Grid of every slot against every provider for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub providers: Vec<Provider>,
    pub rows: Vec<ScheduleRow>,
}

impl DaySchedule {
    pub fn build(date: NaiveDate, providers: Vec<Provider>, bookings: &[Booking]) -> Self {
        let rows = SlotGenerator::generate()
            .into_iter()
            .map(|timeslot| {
                let cells = providers
                    .iter()
                    .map(|provider| {
                        bookings
                            .iter()
                            .find(|b| b.occupies(&provider.id, date, &timeslot))
                            .map(|b| ScheduleCell::Booked {
                                booking_id: b.id().to_string(),
                                customer_name: b.customer().name.clone(),
                                service_name: b.service_name().to_string(),
                            })
                            .unwrap_or(ScheduleCell::Available)
                    })
                    .collect();
                ScheduleRow { timeslot, cells }
            })
            .collect();

        Self {
            date,
            providers,
            rows,
        }
    }

    pub fn cell(&self, provider_id: &str, timeslot: &str) -> Option<&ScheduleCell> {
        let column = self.providers.iter().position(|p| p.id == provider_id)?;
        self.rows
            .iter()
            .find(|row| row.timeslot == timeslot)
            .and_then(|row| row.cells.get(column))
    }

    /// Pre-fills a draft for an available cell with `service_id` selected.
    pub fn quick_draft(
        &self,
        provider_id: &str,
        timeslot: &str,
        service_id: &str,
    ) -> Option<BookingDraft> {
        if !self.cell(provider_id, timeslot)?.is_available() {
            return None;
        }

        Some(
            BookingDraft::new()
                .with_service(service_id)
                .with_provider(provider_id)
                .with_date(self.date)
                .with_timeslot(timeslot),
        )
    }

    pub fn available_cells(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.is_available())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{Customer, ServiceOffering};

    fn providers() -> Vec<Provider> {
        vec![
            Provider::new("b1", "Matheus", ""),
            Provider::new("b2", "Devanil", ""),
        ]
    }

    fn booking(provider: &Provider, date: NaiveDate, slot: &str) -> Booking {
        let service = ServiceOffering::new("s1", "Classic Cut", 30, Decimal::from(35));
        let customer = Customer {
            name: "Ana".to_string(),
            phone: "123".to_string(),
            email: "a@x.com".to_string(),
            created_at: Utc::now(),
        };
        Booking::new(&service, provider, date, slot, customer)
    }

    #[test]
    fn test_board_marks_booked_cells() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let providers = providers();
        let bookings = vec![booking(&providers[1], date, "10:00")];

        let board = DaySchedule::build(date, providers, &bookings);

        assert_eq!(board.rows.len(), 21);
        assert_eq!(board.available_cells(), 41);
        assert!(board.cell("b1", "10:00").unwrap().is_available());
        match board.cell("b2", "10:00").unwrap() {
            ScheduleCell::Booked {
                customer_name,
                service_name,
                ..
            } => {
                assert_eq!(customer_name, "Ana");
                assert_eq!(service_name, "Classic Cut");
            }
            ScheduleCell::Available => panic!("expected booked cell"),
        }
    }

    #[test]
    fn test_quick_draft_only_for_available_cells() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let providers = providers();
        let bookings = vec![booking(&providers[0], date, "09:00")];
        let board = DaySchedule::build(date, providers, &bookings);

        assert!(board.quick_draft("b1", "09:00", "s1").is_none());
        assert!(board.quick_draft("b9", "09:30", "s1").is_none());

        let draft = board.quick_draft("b1", "09:30", "s1").unwrap();
        assert_eq!(draft.service_id.as_deref(), Some("s1"));
        assert_eq!(draft.provider_id.as_deref(), Some("b1"));
        assert_eq!(draft.date, Some(date));
        assert_eq!(draft.timeslot.as_deref(), Some("09:30"));
    }
}
