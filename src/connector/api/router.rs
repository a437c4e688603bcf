use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::{BookingDraft, Commands};

use super::container::Container;
use super::controller::{
    AvailabilityController, BookingController, CatalogController, ListBookingsController,
    ScheduleController, SlotsController, StatsController,
};

pub struct Router<'a> {
    slots_controller: SlotsController,
    catalog_controller: CatalogController<'a>,
    availability_controller: AvailabilityController<'a>,
    booking_controller: BookingController<'a>,
    stats_controller: StatsController<'a>,
    schedule_controller: ScheduleController<'a>,
    list_bookings_controller: ListBookingsController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            slots_controller: SlotsController::new(),
            catalog_controller: CatalogController::new(container),
            availability_controller: AvailabilityController::new(container),
            booking_controller: BookingController::new(container),
            stats_controller: StatsController::new(container),
            schedule_controller: ScheduleController::new(container),
            list_bookings_controller: ListBookingsController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Slots => Ok(self.slots_controller.slots()),
            Commands::Catalog => self.catalog_controller.catalog().await,
            Commands::Availability { provider, date } => {
                self.availability_controller
                    .availability(&provider, date_or_today(date))
                    .await
            }
            Commands::Book {
                service,
                provider,
                date,
                time,
                name,
                phone,
                email,
            } => {
                let draft = BookingDraft {
                    service_id: service,
                    provider_id: provider,
                    date,
                    timeslot: time,
                    customer_name: name,
                    customer_phone: phone,
                    customer_email: email,
                };
                self.booking_controller.book(draft).await
            }
            Commands::Stats { date } => self.stats_controller.stats(date_or_today(date)).await,
            Commands::Schedule { date } => {
                self.schedule_controller
                    .schedule(date_or_today(date))
                    .await
            }
            Commands::List { date } => self.list_bookings_controller.list(date).await,
        }
    }
}

fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
