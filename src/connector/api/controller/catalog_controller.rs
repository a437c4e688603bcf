use anyhow::Result;

use crate::{Provider, ServiceOffering};

use super::super::Container;

pub struct CatalogController<'a> {
    container: &'a Container,
}

impl<'a> CatalogController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn catalog(&self) -> Result<String> {
        let catalog = self.container.catalog();
        let services = catalog.services().await?;
        let providers = catalog.providers().await?;
        Ok(self.format_catalog(&services, &providers))
    }

    fn format_catalog(&self, services: &[ServiceOffering], providers: &[Provider]) -> String {
        let mut output = "Services:\n".to_string();
        for service in services {
            output.push_str(&format!(
                "  {}  {} ({} min, {:.2})\n",
                service.id, service.name, service.duration_minutes, service.price
            ));
        }

        output.push_str("\nProviders:\n");
        for provider in providers {
            if provider.note.is_empty() {
                output.push_str(&format!("  {}  {}\n", provider.id, provider.name));
            } else {
                output.push_str(&format!(
                    "  {}  {} - {}\n",
                    provider.id, provider.name, provider.note
                ));
            }
        }

        output
    }
}
