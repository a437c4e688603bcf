use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::ValueEnum;
use tracing::debug;

use crate::application::{BookingRepository, CatalogRepository, CorruptStorePolicy};
use crate::{
    CheckAvailabilityUseCase, CreateBookingUseCase, DailyStatsUseCase, DuckdbBookingRepository,
    InMemoryBookingRepository, JsonFileBookingRepository, ListBookingsUseCase, StaticCatalog,
    ViewScheduleUseCase,
};

/// Storage backend holding the booking collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StoreBackend {
    /// One JSON array in `bookings.json`.
    #[default]
    Json,
    /// DuckDB table in `slotbook.duckdb`.
    Duckdb,
    /// Process memory; nothing survives the command.
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Json => "json",
            StoreBackend::Duckdb => "duckdb",
            StoreBackend::Memory => "memory",
        }
    }
}

pub struct ContainerConfig {
    pub data_dir: String,
    pub store: StoreBackend,
    /// JSON catalog replacing the built-in barbershop catalog.
    pub catalog_path: Option<String>,
    /// Treat an undecodable store as empty instead of failing.
    pub lenient_storage: bool,
}

pub struct Container {
    booking_repo: Arc<dyn BookingRepository>,
    catalog: Arc<dyn CatalogRepository>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let data_dir = PathBuf::from(&config.data_dir);

        let booking_repo: Arc<dyn BookingRepository> = match config.store {
            StoreBackend::Json => {
                let path = data_dir.join("bookings.json");
                debug!("Using JSON booking store at {:?}", path);
                Arc::new(JsonFileBookingRepository::new(path))
            }
            StoreBackend::Duckdb => {
                let path = data_dir.join("slotbook.duckdb");
                debug!("Using DuckDB booking store at {:?}", path);
                Arc::new(DuckdbBookingRepository::new(&path)?)
            }
            StoreBackend::Memory => {
                debug!("Using in-memory booking store");
                Arc::new(InMemoryBookingRepository::new())
            }
        };

        let catalog: Arc<dyn CatalogRepository> = match config.catalog_path.as_deref() {
            Some(path) => {
                debug!("Loading catalog from {}", path);
                Arc::new(StaticCatalog::from_json_file(&PathBuf::from(path))?)
            }
            None => Arc::new(StaticCatalog::barbershop()),
        };

        Ok(Self::with_components(booking_repo, catalog, config))
    }

    /// Assembles a container around already-built components.
    pub fn with_components(
        booking_repo: Arc<dyn BookingRepository>,
        catalog: Arc<dyn CatalogRepository>,
        config: ContainerConfig,
    ) -> Self {
        Self {
            booking_repo,
            catalog,
            config,
        }
    }

    fn corrupt_policy(&self) -> CorruptStorePolicy {
        if self.config.lenient_storage {
            CorruptStorePolicy::Lenient
        } else {
            CorruptStorePolicy::Strict
        }
    }

    pub fn create_booking_use_case(&self) -> CreateBookingUseCase {
        CreateBookingUseCase::new(self.booking_repo.clone(), self.catalog.clone())
            .with_corrupt_policy(self.corrupt_policy())
    }

    pub fn availability_use_case(&self) -> CheckAvailabilityUseCase {
        CheckAvailabilityUseCase::new(self.booking_repo.clone())
            .with_corrupt_policy(self.corrupt_policy())
    }

    pub fn stats_use_case(&self) -> DailyStatsUseCase {
        DailyStatsUseCase::new(self.booking_repo.clone(), self.catalog.clone())
            .with_corrupt_policy(self.corrupt_policy())
    }

    pub fn schedule_use_case(&self) -> ViewScheduleUseCase {
        ViewScheduleUseCase::new(self.booking_repo.clone(), self.catalog.clone())
            .with_corrupt_policy(self.corrupt_policy())
    }

    pub fn list_bookings_use_case(&self) -> ListBookingsUseCase {
        ListBookingsUseCase::new(self.booking_repo.clone())
            .with_corrupt_policy(self.corrupt_policy())
    }

    pub fn catalog(&self) -> Arc<dyn CatalogRepository> {
        self.catalog.clone()
    }

    pub fn data_dir(&self) -> &str {
        &self.config.data_dir
    }

    pub fn store(&self) -> StoreBackend {
        self.config.store
    }
}
