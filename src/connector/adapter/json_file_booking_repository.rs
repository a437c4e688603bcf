use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{BookingLoad, BookingRepository};
use crate::domain::{Booking, DomainError};

/// Keeps the whole booking collection as one JSON array in a single file.
///
/// Every append rewrites the full file. Writers inside this process are
/// serialized by `write_lock`; the file is replaced by rename so readers see
/// either the old or the new collection. Separate processes sharing the file
/// are not coordinated.
pub struct JsonFileBookingRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileBookingRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read(&self) -> Result<BookingLoad, DomainError> {
        match tokio::fs::read(&self.path).await {
            Ok(raw) => Ok(decode(&raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BookingLoad::Loaded(Vec::new())),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn write(&self, bookings: &[Booking]) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(bookings)
            .map_err(|e| DomainError::storage(format!("Failed to encode bookings: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json).await.map_err(|e| {
            DomainError::storage(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;
        tokio::fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            DomainError::storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}

fn decode(raw: &[u8]) -> BookingLoad {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return BookingLoad::Loaded(Vec::new());
    }

    match serde_json::from_slice::<Vec<Booking>>(raw) {
        Ok(bookings) => BookingLoad::Loaded(bookings),
        Err(e) => BookingLoad::Corrupt {
            reason: format!("invalid booking JSON: {}", e),
        },
    }
}

#[async_trait]
impl BookingRepository for JsonFileBookingRepository {
    async fn load_all(&self) -> Result<BookingLoad, DomainError> {
        self.read().await
    }

    async fn append(&self, booking: &Booking) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut bookings = match self.read().await? {
            BookingLoad::Loaded(bookings) => bookings,
            BookingLoad::Corrupt { reason } => {
                return Err(DomainError::storage_corrupt(format!(
                    "refusing to overwrite {}: {}",
                    self.path.display(),
                    reason
                )));
            }
        };

        if bookings
            .iter()
            .any(|b| b.occupies(booking.provider_id(), booking.date(), booking.timeslot()))
        {
            return Err(DomainError::slot_conflict(
                booking.provider_id(),
                booking.date(),
                booking.timeslot(),
            ));
        }

        bookings.push(booking.clone());
        self.write(&bookings).await?;

        debug!(
            "Appended booking {} to {} ({} total)",
            booking.id(),
            self.path.display(),
            bookings.len()
        );
        Ok(())
    }
}
