use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the daily time grid
    Slots,

    /// List services and providers
    Catalog,

    /// Show free slots for a provider
    Availability {
        #[arg(short, long)]
        provider: String,

        /// Calendar date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Book a slot
    Book {
        #[arg(short, long)]
        service: Option<String>,

        #[arg(short, long)]
        provider: Option<String>,

        #[arg(long)]
        date: Option<NaiveDate>,

        /// Slot label such as 10:30
        #[arg(short, long)]
        time: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Daily counts, remaining capacity and revenue
    Stats {
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Slot-by-provider board for a day
    Schedule {
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List stored bookings, optionally for one date
    List {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}
