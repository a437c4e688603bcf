use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bookable service from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    #[serde(alias = "duration")]
    pub duration_minutes: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl ServiceOffering {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        duration_minutes: u32,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration_minutes,
            price,
        }
    }
}

/// A provider who can deliver any service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub note: String,
}

impl Provider {
    pub fn new(id: impl Into<String>, name: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            note: note.into(),
        }
    }
}
