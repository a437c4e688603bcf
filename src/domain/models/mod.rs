mod booking;
mod booking_draft;
mod catalog;
mod daily_stats;
mod schedule;
mod time_slot;

pub use booking::*;
pub use booking_draft::*;
pub use catalog::*;
pub use daily_stats::*;
pub use schedule::*;
pub use time_slot::*;
