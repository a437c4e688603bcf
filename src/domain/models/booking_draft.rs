use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Customer, SlotGenerator};
use crate::domain::DomainError;

/// A candidate booking assembled by the caller step by step.
///
/// Drafts are plain values owned by whoever builds them; nothing in the
/// crate keeps one between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub service_id: Option<String>,
    pub provider_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub timeslot: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = Some(service_id.into());
        self
    }

    pub fn with_provider(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_id = Some(provider_id.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_timeslot(mut self, timeslot: impl Into<String>) -> Self {
        self.timeslot = Some(timeslot.into());
        self
    }

    pub fn with_customer(
        mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.customer_name = Some(name.into());
        self.customer_phone = Some(phone.into());
        self.customer_email = Some(email.into());
        self
    }

    /// Returns the selected (service id, provider id).
    pub fn selection(&self) -> Result<(&str, &str), DomainError> {
        match (non_blank(&self.service_id), non_blank(&self.provider_id)) {
            (Some(service_id), Some(provider_id)) => Ok((service_id, provider_id)),
            (None, _) => Err(DomainError::missing_selection("no service selected")),
            (_, None) => Err(DomainError::missing_selection("no provider selected")),
        }
    }

    pub fn schedule(&self) -> Result<(NaiveDate, &str), DomainError> {
        let date = self
            .date
            .ok_or_else(|| DomainError::missing_schedule("no date selected"))?;
        let timeslot = non_blank(&self.timeslot)
            .ok_or_else(|| DomainError::missing_schedule("no timeslot selected"))?;

        if !SlotGenerator::contains(timeslot) {
            return Err(DomainError::missing_schedule(format!(
                "'{}' is not a bookable timeslot",
                timeslot
            )));
        }

        Ok((date, timeslot))
    }

    /// Trimmed customer details stamped with the current time.
    pub fn customer(&self) -> Result<Customer, DomainError> {
        let name = non_blank(&self.customer_name)
            .ok_or_else(|| DomainError::missing_customer_info("name is required"))?;
        let phone = non_blank(&self.customer_phone)
            .ok_or_else(|| DomainError::missing_customer_info("phone is required"))?;
        let email = non_blank(&self.customer_email)
            .ok_or_else(|| DomainError::missing_customer_info("email is required"))?;

        Ok(Customer {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_selection_requires_both_ids() {
        let draft = BookingDraft::new().with_service("s1");
        assert!(matches!(
            draft.selection(),
            Err(DomainError::MissingSelection(_))
        ));

        let draft = BookingDraft::new().with_provider("b1").with_service("  ");
        assert!(matches!(
            draft.selection(),
            Err(DomainError::MissingSelection(_))
        ));

        let draft = BookingDraft::new().with_service("s1").with_provider("b1");
        assert_eq!(draft.selection().unwrap(), ("s1", "b1"));
    }

    #[test]
    fn test_schedule_rejects_missing_or_unknown_slot() {
        let draft = BookingDraft::new().with_date(date());
        assert!(matches!(draft.schedule(), Err(DomainError::MissingSchedule(_))));

        let draft = BookingDraft::new().with_timeslot("10:00");
        assert!(matches!(draft.schedule(), Err(DomainError::MissingSchedule(_))));

        let draft = BookingDraft::new().with_date(date()).with_timeslot("10:15");
        assert!(matches!(draft.schedule(), Err(DomainError::MissingSchedule(_))));

        let draft = BookingDraft::new().with_date(date()).with_timeslot("19:00");
        assert_eq!(draft.schedule().unwrap(), (date(), "19:00"));
    }

    #[test]
    fn test_customer_is_trimmed() {
        let draft = BookingDraft::new().with_customer("  Ana ", "123 ", " a@x.com");
        let customer = draft.customer().unwrap();

        assert_eq!(customer.name, "Ana");
        assert_eq!(customer.phone, "123");
        assert_eq!(customer.email, "a@x.com");
    }

    #[test]
    fn test_customer_rejects_whitespace_only_fields() {
        let draft = BookingDraft::new().with_customer("Ana", "   ", "a@x.com");
        assert!(matches!(
            draft.customer(),
            Err(DomainError::MissingCustomerInfo(_))
        ));
    }
}
