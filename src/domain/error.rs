use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing selection: {0}")]
    MissingSelection(String),

    #[error("Missing schedule: {0}")]
    MissingSchedule(String),

    #[error("Missing customer info: {0}")]
    MissingCustomerInfo(String),

    #[error("Slot {timeslot} on {date} is already booked for provider {provider_id}")]
    SlotConflict {
        provider_id: String,
        date: NaiveDate,
        timeslot: String,
    },

    #[error("Storage corrupt: {0}")]
    StorageCorrupt(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn missing_selection(msg: impl Into<String>) -> Self {
        Self::MissingSelection(msg.into())
    }

    pub fn missing_schedule(msg: impl Into<String>) -> Self {
        Self::MissingSchedule(msg.into())
    }

    pub fn missing_customer_info(msg: impl Into<String>) -> Self {
        Self::MissingCustomerInfo(msg.into())
    }

    pub fn slot_conflict(
        provider_id: impl Into<String>,
        date: NaiveDate,
        timeslot: impl Into<String>,
    ) -> Self {
        Self::SlotConflict {
            provider_id: provider_id.into(),
            date,
            timeslot: timeslot.into(),
        }
    }

    pub fn storage_corrupt(msg: impl Into<String>) -> Self {
        Self::StorageCorrupt(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageError(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Draft was incomplete; the caller should re-prompt.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingSelection(_) | Self::MissingSchedule(_) | Self::MissingCustomerInfo(_)
        )
    }

    pub fn is_slot_conflict(&self) -> bool {
        matches!(self, Self::SlotConflict { .. })
    }

    /// Re-fetching availability and submitting again may succeed.
    pub fn is_retryable(&self) -> bool {
        self.is_slot_conflict()
    }

    pub fn is_storage_corrupt(&self) -> bool {
        matches!(self, Self::StorageCorrupt(_))
    }
}
