use async_trait::async_trait;

use crate::domain::{DomainError, Provider, ServiceOffering};

/// Read access to the externally owned service and provider catalog.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn services(&self) -> Result<Vec<ServiceOffering>, DomainError>;

    async fn providers(&self) -> Result<Vec<Provider>, DomainError>;

    async fn find_service(&self, id: &str) -> Result<Option<ServiceOffering>, DomainError>;

    async fn find_provider(&self, id: &str) -> Result<Option<Provider>, DomainError>;
}
