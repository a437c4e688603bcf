/// Produces the business day's canonical time grid.
///
/// The grid runs from 09:00 to 19:00 in 30-minute steps. The closing
/// `"19:00"` entry is a boundary marker kept for compatibility with stored
/// bookings: it is listed and bookable, but no further block follows it.
pub struct SlotGenerator;

impl SlotGenerator {
    pub const OPENING_HOUR: u32 = 9;
    pub const CLOSING_HOUR: u32 = 19;
    pub const GRANULARITY_MINUTES: u32 = 30;

    pub fn generate() -> Vec<String> {
        let mut slots = Vec::with_capacity(Self::len());
        for hour in Self::OPENING_HOUR..Self::CLOSING_HOUR {
            let mut minute = 0;
            while minute < 60 {
                slots.push(format!("{:02}:{:02}", hour, minute));
                minute += Self::GRANULARITY_MINUTES;
            }
        }
        slots.push(format!("{:02}:00", Self::CLOSING_HOUR));
        slots
    }

    /// Number of grid entries, closing marker included.
    pub const fn len() -> usize {
        ((Self::CLOSING_HOUR - Self::OPENING_HOUR) * (60 / Self::GRANULARITY_MINUTES)) as usize + 1
    }

    pub fn contains(label: &str) -> bool {
        Self::generate().iter().any(|slot| slot == label)
    }
}
