use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use duckdb::{params, Connection};
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{BookingLoad, BookingRepository};
use crate::domain::{Booking, BookingStatus, Customer, DomainError};

const SELECT_BOOKINGS: &str = "SELECT id, service_id, provider_id, service_name, duration_minutes, price, \
     provider_name, booking_date, timeslot, customer_name, customer_phone, customer_email, \
     customer_created_at, status, created_at FROM bookings ORDER BY seq";

pub struct DuckdbBookingRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DuckdbBookingRepository {
    pub fn new(db_path: &Path) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::storage(format!("Failed to open DuckDB database: {}", e)))?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn in_memory() -> Result<Self, DomainError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            DomainError::storage(format!("Failed to open DuckDB in-memory DB: {}", e))
        })?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Returns a clone of the shared connection Arc.
    pub fn shared_connection(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.conn)
    }

    fn initialize_schema(conn: &Connection) -> Result<(), DomainError> {
        conn.execute_batch(
            r#"
            CREATE SEQUENCE IF NOT EXISTS bookings_seq START 1;

            CREATE TABLE IF NOT EXISTS bookings (
                seq BIGINT NOT NULL DEFAULT nextval('bookings_seq'),
                id TEXT PRIMARY KEY,
                service_id TEXT NOT NULL,
                provider_id TEXT NOT NULL,
                service_name TEXT NOT NULL,
                duration_minutes BIGINT NOT NULL,
                price TEXT NOT NULL,
                provider_name TEXT NOT NULL,
                booking_date TEXT NOT NULL,
                timeslot TEXT NOT NULL,
                customer_name TEXT NOT NULL,
                customer_phone TEXT NOT NULL,
                customer_email TEXT NOT NULL,
                customer_created_at TEXT NOT NULL,
                status TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_bookings_slot
            ON bookings(provider_id, booking_date, timeslot);
            "#,
        )
        .map_err(|e| DomainError::storage(format!("Failed to initialize bookings schema: {}", e)))?;

        debug!("DuckDB bookings table initialized");
        Ok(())
    }
}

/// Column values as stored, before domain decoding.
struct StoredBooking {
    id: String,
    service_id: String,
    provider_id: String,
    service_name: String,
    duration_minutes: i64,
    price: String,
    provider_name: String,
    date: String,
    timeslot: String,
    customer_name: String,
    customer_phone: String,
    customer_email: String,
    customer_created_at: String,
    status: String,
    created_at: String,
}

impl StoredBooking {
    fn decode(self) -> Result<Booking, String> {
        let duration_minutes = u32::try_from(self.duration_minutes).map_err(|_| {
            format!(
                "booking {}: invalid duration {}",
                self.id, self.duration_minutes
            )
        })?;
        let price = Decimal::from_str(&self.price)
            .map_err(|e| format!("booking {}: invalid price '{}': {}", self.id, self.price, e))?;
        let date = NaiveDate::from_str(&self.date)
            .map_err(|e| format!("booking {}: invalid date '{}': {}", self.id, self.date, e))?;
        let status = BookingStatus::parse(&self.status)
            .ok_or_else(|| format!("booking {}: unknown status '{}'", self.id, self.status))?;
        let customer_created_at = parse_timestamp(&self.id, &self.customer_created_at)?;
        let created_at = parse_timestamp(&self.id, &self.created_at)?;

        Ok(Booking::reconstitute(
            self.id,
            self.service_id,
            self.provider_id,
            self.service_name,
            duration_minutes,
            price,
            self.provider_name,
            date,
            self.timeslot,
            Customer {
                name: self.customer_name,
                phone: self.customer_phone,
                email: self.customer_email,
                created_at: customer_created_at,
            },
            status,
            created_at,
        ))
    }
}

fn parse_timestamp(id: &str, value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| format!("booking {}: invalid timestamp '{}': {}", id, value, e))
}

#[async_trait]
impl BookingRepository for DuckdbBookingRepository {
    async fn load_all(&self) -> Result<BookingLoad, DomainError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(SELECT_BOOKINGS)
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(StoredBooking {
                    id: row.get(0)?,
                    service_id: row.get(1)?,
                    provider_id: row.get(2)?,
                    service_name: row.get(3)?,
                    duration_minutes: row.get(4)?,
                    price: row.get(5)?,
                    provider_name: row.get(6)?,
                    date: row.get(7)?,
                    timeslot: row.get(8)?,
                    customer_name: row.get(9)?,
                    customer_phone: row.get(10)?,
                    customer_email: row.get(11)?,
                    customer_created_at: row.get(12)?,
                    status: row.get(13)?,
                    created_at: row.get(14)?,
                })
            })
            .map_err(|e| DomainError::storage(format!("Failed to query bookings: {}", e)))?;

        let mut bookings = Vec::new();
        for row in rows {
            let stored =
                row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?;
            match stored.decode() {
                Ok(booking) => bookings.push(booking),
                Err(reason) => return Ok(BookingLoad::Corrupt { reason }),
            }
        }

        Ok(BookingLoad::Loaded(bookings))
    }

    async fn append(&self, booking: &Booking) -> Result<(), DomainError> {
        let mut conn = self.conn.lock().await;
        let tx = conn
            .transaction()
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let statuses: Vec<String> = {
            let mut stmt = tx
                .prepare(
                    "SELECT status FROM bookings \
                     WHERE provider_id = ? AND booking_date = ? AND timeslot = ?",
                )
                .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

            let rows = stmt
                .query_map(
                    params![
                        booking.provider_id(),
                        booking.date().to_string(),
                        booking.timeslot(),
                    ],
                    |row| row.get::<_, String>(0),
                )
                .map_err(|e| DomainError::storage(format!("Failed to query slot: {}", e)))?;

            rows.collect::<Result<Vec<_>, _>>()
                .map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?
        };

        // Unrecognized states are assumed to hold the slot.
        let occupied = statuses.iter().any(|status| {
            BookingStatus::parse(status)
                .map(|s| s.occupies_slot())
                .unwrap_or(true)
        });
        if occupied {
            return Err(DomainError::slot_conflict(
                booking.provider_id(),
                booking.date(),
                booking.timeslot(),
            ));
        }

        let customer = booking.customer();
        tx.execute(
            r#"
            INSERT INTO bookings (id, service_id, provider_id, service_name, duration_minutes, price,
                provider_name, booking_date, timeslot, customer_name, customer_phone, customer_email,
                customer_created_at, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                booking.id(),
                booking.service_id(),
                booking.provider_id(),
                booking.service_name(),
                booking.duration_minutes() as i64,
                booking.price().to_string(),
                booking.provider_name(),
                booking.date().to_string(),
                booking.timeslot(),
                customer.name.as_str(),
                customer.phone.as_str(),
                customer.email.as_str(),
                customer.created_at.to_rfc3339(),
                booking.status().as_str(),
                booking.created_at().to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::storage(format!("Failed to save booking: {}", e)))?;

        tx.commit()
            .map_err(|e| DomainError::storage(format!("Failed to commit: {}", e)))?;

        debug!("Saved booking {} to DuckDB", booking.id());
        Ok(())
    }
}
