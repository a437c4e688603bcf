use std::path::Path;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::application::CatalogRepository;
use crate::domain::{DomainError, Provider, ServiceOffering};

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub services: Vec<ServiceOffering>,
    pub providers: Vec<Provider>,
}

/// Catalog held in memory, seeded from code or a JSON file.
///
/// Entries can be replaced or removed at runtime to reflect edits made by
/// whoever owns the catalog; stored bookings keep their own copies.
pub struct StaticCatalog {
    services: RwLock<Vec<ServiceOffering>>,
    providers: RwLock<Vec<Provider>>,
}

impl StaticCatalog {
    pub fn new(services: Vec<ServiceOffering>, providers: Vec<Provider>) -> Self {
        Self {
            services: RwLock::new(services),
            providers: RwLock::new(providers),
        }
    }

    /// The barbershop's default services and barbers.
    pub fn barbershop() -> Self {
        Self::new(
            vec![
                ServiceOffering::new("s1", "Classic Cut", 30, Decimal::from(35)),
                ServiceOffering::new("s2", "Beard & Moustache", 20, Decimal::from(25)),
                ServiceOffering::new("s3", "Full Combo", 50, Decimal::from(55)),
                ServiceOffering::new("s4", "Kids Cut", 25, Decimal::from(30)),
            ],
            vec![
                Provider::new("b1", "Matheus Henrique", "Classic cuts"),
                Provider::new("b2", "Devanil Junior", "Beards & moustaches"),
                Provider::new("b3", "Victor Mailon", "Modern cuts"),
                Provider::new("b4", "Gustavo Castilho", "Finishing"),
            ],
        )
    }

    pub fn from_json_file(path: &Path) -> Result<Self, DomainError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DomainError::storage(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        let file: CatalogFile = serde_json::from_str(&raw).map_err(|e| {
            DomainError::invalid_input(format!("Invalid catalog {}: {}", path.display(), e))
        })?;

        debug!(
            "Loaded catalog from {} ({} services, {} providers)",
            path.display(),
            file.services.len(),
            file.providers.len()
        );
        Ok(Self::new(file.services, file.providers))
    }

    pub async fn upsert_service(&self, service: ServiceOffering) {
        let mut services = self.services.write().await;
        match services.iter_mut().find(|s| s.id == service.id) {
            Some(existing) => *existing = service,
            None => services.push(service),
        }
    }

    pub async fn remove_service(&self, id: &str) {
        self.services.write().await.retain(|s| s.id != id);
    }

    pub async fn upsert_provider(&self, provider: Provider) {
        let mut providers = self.providers.write().await;
        match providers.iter_mut().find(|p| p.id == provider.id) {
            Some(existing) => *existing = provider,
            None => providers.push(provider),
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::barbershop()
    }
}

#[async_trait]
impl CatalogRepository for StaticCatalog {
    async fn services(&self) -> Result<Vec<ServiceOffering>, DomainError> {
        Ok(self.services.read().await.clone())
    }

    async fn providers(&self) -> Result<Vec<Provider>, DomainError> {
        Ok(self.providers.read().await.clone())
    }

    async fn find_service(&self, id: &str) -> Result<Option<ServiceOffering>, DomainError> {
        let services = self.services.read().await;
        Ok(services.iter().find(|s| s.id == id).cloned())
    }

    async fn find_provider(&self, id: &str) -> Result<Option<Provider>, DomainError> {
        let providers = self.providers.read().await;
        Ok(providers.iter().find(|p| p.id == id).cloned())
    }
}
