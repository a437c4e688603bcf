pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::Commands;

pub use application::{
    BookingLoad, BookingRepository, CatalogRepository, CheckAvailabilityUseCase,
    CorruptStorePolicy, CreateBookingUseCase, DailyStatsUseCase, ListBookingsUseCase,
    ViewScheduleUseCase,
};

pub use connector::{
    CatalogFile, Container, ContainerConfig, DuckdbBookingRepository, InMemoryBookingRepository,
    JsonFileBookingRepository, Router, StaticCatalog, StoreBackend,
};

pub use domain::{
    Booking, BookingDraft, BookingStatus, Customer, DailyStats, DaySchedule, DomainError,
    Provider, ScheduleCell, ScheduleRow, ServiceOffering, SlotGenerator,
};
