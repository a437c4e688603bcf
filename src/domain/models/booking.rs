use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Provider, ServiceOffering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[serde(alias = "confirmado")]
    Confirmed,
    /// Never produced by booking creation yet; accepted from storage.
    #[serde(alias = "pendente")]
    Pending,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "confirmed" | "confirmado" => Some(BookingStatus::Confirmed),
            "pending" | "pendente" => Some(BookingStatus::Pending),
            _ => None,
        }
    }

    /// Whether a booking in this state holds its (provider, date, timeslot) key.
    pub fn occupies_slot(&self) -> bool {
        match self {
            BookingStatus::Confirmed | BookingStatus::Pending => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A committed booking. Service and provider fields are copies taken at
/// creation time and are never re-derived from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    id: String,
    service_id: String,
    #[serde(alias = "barberId")]
    provider_id: String,
    service_name: String,
    #[serde(alias = "duration")]
    duration_minutes: u32,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    #[serde(alias = "barberName")]
    provider_name: String,
    date: NaiveDate,
    timeslot: String,
    customer: Customer,
    status: BookingStatus,
    created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a confirmed booking, snapshotting the catalog entries.
    pub fn new(
        service: &ServiceOffering,
        provider: &Provider,
        date: NaiveDate,
        timeslot: impl Into<String>,
        customer: Customer,
    ) -> Self {
        Self {
            id: generate_booking_id(),
            service_id: service.id.clone(),
            provider_id: provider.id.clone(),
            service_name: service.name.clone(),
            duration_minutes: service.duration_minutes,
            price: service.price,
            provider_name: provider.name.clone(),
            date,
            timeslot: timeslot.into(),
            created_at: customer.created_at,
            customer,
            status: BookingStatus::Confirmed,
        }
    }

    /// Reconstitutes from persisted data (used by adapters).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: String,
        service_id: String,
        provider_id: String,
        service_name: String,
        duration_minutes: u32,
        price: Decimal,
        provider_name: String,
        date: NaiveDate,
        timeslot: String,
        customer: Customer,
        status: BookingStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            service_id,
            provider_id,
            service_name,
            duration_minutes,
            price,
            provider_name,
            date,
            timeslot,
            customer,
            status,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn timeslot(&self) -> &str {
        &self.timeslot
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_for(&self, provider_id: &str, date: NaiveDate) -> bool {
        self.provider_id == provider_id && self.date == date
    }

    /// True when this booking holds the given slot key.
    pub fn occupies(&self, provider_id: &str, date: NaiveDate, timeslot: &str) -> bool {
        self.is_for(provider_id, date) && self.timeslot == timeslot && self.status.occupies_slot()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} {} {} with {} for {} ({})",
            self.date,
            self.timeslot,
            self.service_name,
            self.provider_name,
            self.customer.name,
            self.id
        )
    }
}

fn generate_booking_id() -> String {
    format!("bk_{}", Uuid::now_v7().simple())
}
