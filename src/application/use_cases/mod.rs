mod check_availability;
mod create_booking;
mod daily_stats;
mod list_bookings;
mod view_schedule;

pub use check_availability::*;
pub use create_booking::*;
pub use daily_stats::*;
pub use list_bookings::*;
pub use view_schedule::*;
