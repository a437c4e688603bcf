use anyhow::Result;
use chrono::NaiveDate;

use crate::DailyStats;

use super::super::Container;

pub struct StatsController<'a> {
    container: &'a Container,
}

impl<'a> StatsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn stats(&self, date: NaiveDate) -> Result<String> {
        let use_case = self.container.stats_use_case();
        let stats = use_case.summarize(date).await?;
        Ok(self.format_stats(&stats))
    }

    fn format_stats(&self, stats: &DailyStats) -> String {
        format!(
            "Statistics for {}\n========================\nConfirmed: {}\nPending:   {}\nAvailable: {}\nRevenue:   {}\nStore:     {} ({})",
            stats.date,
            stats.confirmed_count,
            stats.pending_count,
            stats.available_count,
            stats.formatted_revenue(),
            self.container.store().as_str(),
            self.container.data_dir()
        )
    }
}
