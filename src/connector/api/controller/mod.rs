pub mod availability_controller;
pub mod booking_controller;
pub mod catalog_controller;
pub mod list_bookings_controller;
pub mod schedule_controller;
pub mod slots_controller;
pub mod stats_controller;

pub use availability_controller::AvailabilityController;
pub use booking_controller::BookingController;
pub use catalog_controller::CatalogController;
pub use list_bookings_controller::ListBookingsController;
pub use schedule_controller::ScheduleController;
pub use slots_controller::SlotsController;
pub use stats_controller::StatsController;
